use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ForumService;
use crate::middlewares::RequireJWT;
use crate::models::forum::requests::UpdateForumPostRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_post(
    service: &ForumService,
    request: &HttpRequest,
    post_id: i64,
    update: UpdateForumPostRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(uid) = RequireJWT::extract_person_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized: missing person id",
        )));
    };

    let content = update.content.trim();
    if content.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "El comentario no puede estar vacío",
        )));
    }

    // 只能编辑自己的帖子，软删除的不能再编辑
    let post = match storage.get_forum_post(post_id).await {
        Ok(Some(post)) => post,
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
                    "Error al actualizar comentario",
                )),
            );
        }
    };

    if post.author_id != uid {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::ForumPermissionDenied,
            "Solo el autor puede editar su comentario",
        )));
    }

    if post.deleted {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ForumPostNotFound,
            "El comentario fue eliminado",
        )));
    }

    match storage.update_forum_post(post_id, content).await {
        Ok(true) => {
            info!("Forum post {} updated by {}", post_id, uid);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Comentario actualizado")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ForumPostNotFound,
            format!("No se encontró el comentario {post_id}"),
        ))),
        Err(e) => {
            error!("Failed to update forum post {}: {}", post_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error al actualizar comentario",
                )),
            )
        }
    }
}
