use chrono::NaiveDate;
use transport_routes::services::AnalyticsService;
use transport_routes::{
    CreateDriverRequest, CreateRouteRequest, DriverFilters, DriverId, DriverStatus, RegistryError,
    RouteFilters, RouteRegistry, RouteStatus,
};

fn date(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, m, d).unwrap()
}

fn seeded() -> RouteRegistry {
    RouteRegistry::with_sample_data().expect("sample data must load")
}

#[test]
fn test_new_driver_is_listed_without_filters() {
    let mut registry = seeded();
    let driver = registry
        .add_driver(
            CreateDriverRequest::new("Rosa Quispe", "K111222")
                .with_id(11)
                .with_vehicle("Camión K"),
        )
        .unwrap();

    let all = registry.filter_drivers(&DriverFilters::default());
    assert_eq!(all.len(), 11);
    assert_eq!(all.last(), Some(&driver));
}

#[test]
fn test_duplicate_driver_id_is_rejected() {
    let mut registry = seeded();
    let before = registry.snapshot();

    let result = registry.add_driver(CreateDriverRequest::new("Juan Pérez", "A123456").with_id(3));
    assert!(matches!(
        result,
        Err(RegistryError::Duplicate { id: 3, .. })
    ));
    assert_eq!(registry.snapshot(), before);
}

#[test]
fn test_missing_required_driver_fields() {
    let mut registry = seeded();
    let err = registry
        .add_driver(CreateDriverRequest::new("", "A999999"))
        .unwrap_err();
    assert_eq!(err.code(), "VALIDATION_ERROR");
    assert_eq!(registry.driver_count(), 10);
}

#[test]
fn test_route_with_unknown_driver_is_rejected() {
    let mut registry = seeded();
    let err = registry
        .add_route(CreateRouteRequest::new(DriverId(404), "Lima", "Ica", 300.0, 1000.0, date(6, 1)))
        .unwrap_err();
    assert!(matches!(err, RegistryError::Reference { id: 404, .. }));
    assert_eq!(registry.route_count(), 20);
}

#[test]
fn test_negative_distance_or_cargo_is_rejected() {
    let mut registry = seeded();

    let err = registry
        .add_route(CreateRouteRequest::new(DriverId(1), "Lima", "Ica", -5.0, 1000.0, date(6, 1)))
        .unwrap_err();
    assert!(err.is_validation());

    let err = registry
        .add_route(CreateRouteRequest::new(DriverId(1), "Lima", "Ica", 5.0, -1000.0, date(6, 1)))
        .unwrap_err();
    assert!(err.is_validation());

    assert_eq!(registry.route_count(), 20);
}

#[test]
fn test_summary_matches_route_sums() {
    let registry = seeded();
    let summary = registry.summary_by_driver();
    assert_eq!(summary.len(), registry.driver_count());

    for (driver_id, totals) in &summary {
        let routes = registry.filter_routes(&RouteFilters::for_driver(*driver_id));
        let distance: f64 = routes.iter().map(|r| r.distance_km).sum();
        let cargo: f64 = routes.iter().map(|r| r.cargo_kg).sum();
        assert_eq!(totals.total_distance_km, distance);
        assert_eq!(totals.total_cargo_kg, cargo);
        assert_eq!(totals.route_count, routes.len());
    }

    // Juan Pérez: 1000 + 1000 + 150
    assert_eq!(summary[&DriverId(1)].total_distance_km, 2150.0);
    assert_eq!(summary[&DriverId(1)].total_cargo_kg, 18300.0);
}

#[test]
fn test_summary_reports_driver_without_routes_as_zero() {
    let mut registry = seeded();
    let driver = registry
        .add_driver(CreateDriverRequest::new("Rosa Quispe", "K111222"))
        .unwrap();

    let totals = registry.summary_by_driver()[&driver.id];
    assert_eq!(totals.total_distance_km, 0.0);
    assert_eq!(totals.total_cargo_kg, 0.0);
    assert_eq!(totals.route_count, 0);
}

#[test]
fn test_filter_routes_order_and_driver_filter() {
    let registry = seeded();

    let all = registry.filter_routes(&RouteFilters::default());
    assert_eq!(all, registry.routes().to_vec());

    let maria = registry.filter_routes(&RouteFilters::for_driver(DriverId(2)));
    let ids: Vec<u32> = maria.iter().map(|r| r.id.0).collect();
    assert_eq!(ids, vec![3, 4, 15]);
    assert!(maria.iter().all(|r| r.driver_id == DriverId(2)));
}

#[test]
fn test_combined_route_filters() {
    let registry = seeded();
    let filters = RouteFilters {
        status: Some(RouteStatus::Completed),
        date_from: Some(date(1, 10)),
        min_distance_km: Some(700.0),
        ..Default::default()
    };

    let routes = registry.filter_routes(&filters);
    let ids: Vec<u32> = routes.iter().map(|r| r.id.0).collect();
    assert_eq!(ids, vec![8, 10, 12]);
}

#[test]
fn test_filters_are_idempotent() {
    let registry = seeded();
    let filters = RouteFilters {
        location_contains: Some("lima".to_string()),
        ..Default::default()
    };
    assert_eq!(registry.filter_routes(&filters), registry.filter_routes(&filters));

    let drivers = DriverFilters {
        status: Some(DriverStatus::OnRoute),
        ..Default::default()
    };
    let first = registry.filter_drivers(&drivers);
    assert_eq!(first.len(), 3);
    assert_eq!(first, registry.filter_drivers(&drivers));
}

#[test]
fn test_find_driver_by_name_and_filter_routes() {
    let registry = seeded();
    let driver = registry.find_driver_by_name("Isabel Ruiz").unwrap();
    let routes = registry.filter_routes(&RouteFilters::for_driver(driver.id));
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].origin, "Ayacucho");
}

#[test]
fn test_dashboard_over_sample_data() {
    let registry = seeded();
    let dashboard = AnalyticsService::dashboard(&registry);

    assert_eq!(dashboard.total_drivers, 10);
    assert_eq!(dashboard.active_routes, 6);
    assert_eq!(dashboard.total_distance_km, 15530.0);
    assert_eq!(dashboard.total_cargo_kg, 104_400.0);
    assert_eq!(dashboard.routes_per_driver.len(), 10);

    let json = serde_json::to_value(&dashboard).unwrap();
    assert_eq!(json["routes_by_status"]["completed"], 9);
}
