//! Servicio de geocodificación
//!
//! Busca direcciones en Nominatim (OpenStreetMap) y devuelve candidatos con
//! coordenadas para el planificador de rutas. Los resultados se cachean por
//! consulta durante la vida del servicio.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;

use crate::config::environment::EnvironmentConfig;
use crate::models::geo::GeoPoint;

const BATCH_CHUNK_SIZE: usize = 5;
const BATCH_PAUSE: Duration = Duration::from_secs(1);

#[derive(Error, Debug)]
pub enum GeocodingError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Geocoding failed with status {0}")]
    Status(u16),

    #[error("Failed to parse geocoding response: {0}")]
    Parse(String),
}

/// Coincidencia devuelta al usuario para que elija
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodingCandidate {
    pub display_name: String,
    pub point: GeoPoint,
}

/// Entrada cruda de Nominatim: lat/lon vienen como strings
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    display_name: String,
    lat: String,
    lon: String,
}

impl NominatimPlace {
    fn into_candidate(self) -> Option<GeocodingCandidate> {
        let latitude = self.lat.trim().parse::<f64>().ok()?;
        let longitude = self.lon.trim().parse::<f64>().ok()?;
        let point = GeoPoint::new(latitude, longitude).ok()?;
        Some(GeocodingCandidate {
            display_name: self.display_name,
            point,
        })
    }
}

type SearchCache = Arc<RwLock<HashMap<String, Vec<GeocodingCandidate>>>>;

#[derive(Clone)]
pub struct GeocodingService {
    base_url: String,
    limit: u8,
    client: reqwest::Client,
    cache: SearchCache,
}

impl GeocodingService {
    pub fn new(config: &EnvironmentConfig) -> Result<Self, GeocodingError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.geocoding_timeout_secs))
            .user_agent(config.geocoding_user_agent.clone())
            .build()?;

        Ok(Self {
            base_url: config.nominatim_url.trim_end_matches('/').to_string(),
            limit: config.geocoding_limit,
            client,
            cache: Arc::new(RwLock::new(HashMap::new())),
        })
    }

    /// Posibles coincidencias para una dirección. Consulta vacía -> `[]`.
    pub async fn search(&self, query: &str) -> Result<Vec<GeocodingCandidate>, GeocodingError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(cached) = self.cache.read().await.get(query) {
            log::debug!("💾 Geocoding cache hit: {}", query);
            return Ok(cached.clone());
        }

        log::info!("🗺️ Geocoding address: {}", query);

        let url = format!(
            "{}/search?q={}&format=json&limit={}",
            self.base_url,
            urlencoding::encode(query),
            self.limit
        );

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        log::info!("📡 Response status: {}", status);

        if !status.is_success() {
            log::error!("❌ Geocoding failed with status {}", status);
            return Err(GeocodingError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let places: Vec<NominatimPlace> =
            serde_json::from_str(&body).map_err(|e| GeocodingError::Parse(e.to_string()))?;

        let candidates: Vec<GeocodingCandidate> = places
            .into_iter()
            .filter_map(NominatimPlace::into_candidate)
            .collect();

        log::info!("✅ Geocoding found {} candidates for '{}'", candidates.len(), query);

        self.cache
            .write()
            .await
            .insert(query.to_string(), candidates.clone());

        Ok(candidates)
    }

    /// Igual que `search`, pero cualquier error se registra y se devuelve `[]`
    pub async fn search_or_empty(&self, query: &str) -> Vec<GeocodingCandidate> {
        match self.search(query).await {
            Ok(candidates) => candidates,
            Err(e) => {
                log::warn!("⚠️ Geocoding error for '{}': {}", query, e);
                Vec::new()
            }
        }
    }

    pub async fn batch_search(&self, queries: &[String]) -> Vec<Vec<GeocodingCandidate>> {
        log::info!("🗺️ Batch geocoding {} addresses", queries.len());

        let mut results = Vec::with_capacity(queries.len());
        let mut chunks = queries.chunks(BATCH_CHUNK_SIZE).peekable();

        while let Some(chunk) = chunks.next() {
            let futures = chunk.iter().map(|q| self.search_or_empty(q));
            results.extend(futures::future::join_all(futures).await);

            // pausa entre lotes para respetar el rate limit de Nominatim
            if chunks.peek().is_some() {
                tokio::time::sleep(BATCH_PAUSE).await;
            }
        }

        log::info!("✅ Batch geocoding completed: {} results", results.len());
        results
    }

    pub async fn cached_queries(&self) -> usize {
        self.cache.read().await.len()
    }
}
