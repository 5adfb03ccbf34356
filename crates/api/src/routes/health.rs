use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use donaria_db::DbPool;
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Liveness plus a database round-trip.
async fn health_check(State(pool): State<DbPool>) -> (StatusCode, Json<HealthResponse>) {
    let (code, status) = match donaria_db::health_check(&pool).await {
        Ok(()) => (StatusCode::OK, "ok"),
        Err(_) => (StatusCode::SERVICE_UNAVAILABLE, "degraded"),
    };
    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}

pub fn router(pool: DbPool) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .with_state(pool)
}
