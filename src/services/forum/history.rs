use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ForumService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn post_history(
    service: &ForumService,
    request: &HttpRequest,
    post_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 角色限制由路由上的 RequireRole 处理；这里只确认帖子存在
    match storage.get_forum_post(post_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ForumPostNotFound,
                format!("No se encontró el comentario {post_id}"),
            )));
        }
        Err(e) => {
            error!("Failed to load forum post {}: {}", post_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error al obtener historial del comentario",
                )),
            );
        }
    }

    match storage.forum_post_history(post_id).await {
        Ok(revisions) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(revisions, "Post history")))
        }
        Err(e) => {
            error!("Failed to load history for post {}: {}", post_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error al obtener historial del comentario",
                )),
            )
        }
    }
}
