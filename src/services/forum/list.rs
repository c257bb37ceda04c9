use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ForumService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_posts(
    service: &ForumService,
    request: &HttpRequest,
    assignment_id: i64,
    include_deleted: bool,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .list_forum_posts(assignment_id, include_deleted)
        .await
    {
        Ok(posts) => Ok(HttpResponse::Ok().json(ApiResponse::success(posts, "Forum posts"))),
        Err(e) => {
            error!(
                "Failed to list forum posts for assignment {}: {}",
                assignment_id, e
            );
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error al obtener comentarios del foro",
                )),
            )
        }
    }
}
