use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SystemService;
use crate::models::system::responses::{DbHealthResponse, HealthResponse};
use crate::models::{ApiResponse, AppStartTime, ErrorCode};

pub async fn health(
    _service: &SystemService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let now = chrono::Utc::now();
    let uptime_seconds = request
        .app_data::<actix_web::web::Data<AppStartTime>>()
        .map(|start| now.signed_duration_since(start.start_datetime).num_seconds())
        .unwrap_or(0);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        HealthResponse {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            server_time: now,
            uptime_seconds,
        },
        "Health",
    )))
}

pub async fn db_health(
    service: &SystemService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.ping_database().await {
        Ok(backend) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            DbHealthResponse {
                reachable: true,
                backend,
            },
            "Database reachable",
        ))),
        Err(e) => {
            error!("Database ping failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error al conectar con la base de datos",
                )),
            )
        }
    }
}
