use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Router,
};
use chrono::{DateTime, Utc};
use dotenvy::dotenv;
use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
};
use tower::{limit::ConcurrencyLimitLayer, ServiceBuilder};
use tracing::info;

#[derive(Debug, Deserialize, Serialize, Clone)]
struct Config {
    api_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self { api_port: 8080 }
    }
}

#[derive(Debug, Deserialize)]
struct NewMeasurement {
    sensor_id: String,
    value: f64,
    created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Clone)]
struct Measurement {
    sensor_id: String,
    value: f64,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct ValueUpdate {
    value: f64,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    measurements: usize,
    ok: bool,
}

type Store = Arc<Mutex<Vec<Measurement>>>;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config: Config = Figment::from(Serialized::defaults(Config::default()))
        .merge(Env::prefixed("COLLECTOR_"))
        .extract()
        .unwrap_or_else(|_| Config::default());

    let store: Store = Arc::new(Mutex::new(Vec::new()));

    let app = Router::new()
        .route("/measurements", post(create_measurement).get(get_measurements))
        .route(
            "/measurements/:sensor_id",
            put(update_measurement).delete(delete_measurement),
        )
        .route("/health", get(health_handler))
        .layer(ServiceBuilder::new().layer(ConcurrencyLimitLayer::new(32)))
        .with_state(store);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.api_port));
    info!("Collector running → http://{}/health", addr);
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

async fn create_measurement(
    State(store): State<Store>,
    Json(input): Json<NewMeasurement>,
) -> Result<(StatusCode, String), (StatusCode, String)> {
    if input.sensor_id.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "sensor_id is required".to_string()));
    }

    let measurement = Measurement {
        sensor_id: input.sensor_id,
        value: input.value,
        created_at: input.created_at.unwrap_or_else(Utc::now),
    };
    info!(
        "stored {} = {} @ {}",
        measurement.sensor_id, measurement.value, measurement.created_at
    );
    store.lock().unwrap().push(measurement);

    Ok((StatusCode::CREATED, "measurement stored".to_string()))
}

async fn update_measurement(
    State(store): State<Store>,
    Path(sensor_id): Path<String>,
    Json(input): Json<ValueUpdate>,
) -> Result<(StatusCode, String), (StatusCode, String)> {
    let mut stored = store.lock().unwrap();
    let mut touched = 0;
    for m in stored.iter_mut().filter(|m| m.sensor_id == sensor_id) {
        m.value = input.value;
        touched += 1;
    }
    if touched == 0 {
        return Err((StatusCode::NOT_FOUND, "not found".to_string()));
    }

    info!("updated {} = {} ({} rows)", sensor_id, input.value, touched);
    Ok((StatusCode::OK, "measurement updated".to_string()))
}

async fn delete_measurement(
    State(store): State<Store>,
    Path(sensor_id): Path<String>,
) -> Result<(StatusCode, String), (StatusCode, String)> {
    let mut stored = store.lock().unwrap();
    let before = stored.len();
    stored.retain(|m| m.sensor_id != sensor_id);
    if stored.len() == before {
        return Err((StatusCode::NOT_FOUND, "not found".to_string()));
    }

    info!("deleted {} ({} rows)", sensor_id, before - stored.len());
    Ok((StatusCode::OK, "measurement deleted".to_string()))
}

async fn get_measurements(State(store): State<Store>) -> Json<Vec<Measurement>> {
    Json(store.lock().unwrap().clone())
}

async fn health_handler(State(store): State<Store>) -> Json<HealthResponse> {
    let measurements = store.lock().unwrap().len();
    Json(HealthResponse {
        measurements,
        ok: true,
    })
}
