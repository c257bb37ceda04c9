use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ForumService;
use crate::middlewares::RequireJWT;
use crate::models::users::entities::PersonRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_post(
    service: &ForumService,
    request: &HttpRequest,
    post_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(uid) = RequireJWT::extract_person_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized: missing person id",
        )));
    };
    let role = RequireJWT::extract_person_role(request);

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
                    "Error al eliminar comentario",
                )),
            );
        }
    };

    // 作者本人、教师或管理员可以删除
    let is_moderator = matches!(role, Some(PersonRole::Teacher) | Some(PersonRole::Admin));
    if post.author_id != uid && !is_moderator {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::ForumPermissionDenied,
            "No tienes permiso para eliminar este comentario",
        )));
    }

    match storage.soft_delete_forum_post(post_id).await {
        Ok(true) => {
            info!("Forum post {} soft-deleted by {}", post_id, uid);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Comentario eliminado")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ForumPostNotFound,
            format!("No se encontró el comentario {post_id}"),
        ))),
        Err(e) => {
            error!("Failed to delete forum post {}: {}", post_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error al eliminar comentario",
                )),
            )
        }
    }
}
