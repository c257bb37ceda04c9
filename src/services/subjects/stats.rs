use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SubjectService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn assignment_stats(
    service: &SubjectService,
    request: &HttpRequest,
    assignment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let today = chrono::Utc::now().date_naive();

    match storage.activity_stats(assignment_id, today).await {
        Ok(stats) => Ok(HttpResponse::Ok().json(ApiResponse::success(stats, "Activity stats"))),
        Err(e) => {
            error!(
                "Failed to load activity stats for assignment {}: {}",
                assignment_id, e
            );
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error al obtener estadísticas",
                )),
            )
        }
    }
}
