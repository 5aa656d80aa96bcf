use anyhow::Result;
use dotenvy::dotenv;
use tracing::{error, info};

use transport_routes::config::environment::EnvironmentConfig;
use transport_routes::services::AnalyticsService;
use transport_routes::RouteRegistry;

fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚛 Gestión de Rutas de Transporte");
    info!("================================================");
    info!("⚙️ Entorno: {}", config.environment);

    let registry = if config.seed_sample_data {
        match RouteRegistry::with_sample_data() {
            Ok(registry) => registry,
            Err(e) => {
                error!("❌ Error cargando datos de ejemplo: {}", e);
                return Err(anyhow::anyhow!("Error de datos de ejemplo: {}", e));
            }
        }
    } else {
        info!("📭 Sesión iniciada sin datos de ejemplo");
        RouteRegistry::new()
    };

    let dashboard = AnalyticsService::dashboard(&registry);
    info!("📊 Total conductores: {}", dashboard.total_drivers);
    info!("🚚 Rutas activas: {}", dashboard.active_routes);
    info!("📏 Distancia total: {:.0} km", dashboard.total_distance_km);
    info!("📦 Carga total: {:.0} kg", dashboard.total_cargo_kg);

    info!("👥 Resumen por conductor:");
    for row in AnalyticsService::driver_performance(&registry) {
        info!(
            "   {:<18} rutas: {:>2}  distancia: {:>8.2} km (prom. {:>7.2})  carga: {:>8.2} kg (prom. {:>7.2})",
            row.name,
            row.route_count,
            row.total_distance_km,
            row.average_distance_km,
            row.total_cargo_kg,
            row.average_cargo_kg
        );
    }

    for (day, count) in AnalyticsService::routes_per_day(&registry) {
        info!("📅 {}: {} ruta(s)", day, count);
    }

    println!("{}", serde_json::to_string_pretty(&dashboard)?);

    Ok(())
}
