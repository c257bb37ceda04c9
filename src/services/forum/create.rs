use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ForumService;
use crate::middlewares::RequireJWT;
use crate::models::forum::requests::CreateForumPostRequest;
use crate::models::{ApiResponse, ErrorCode};

// 帖子长度上限
const MAX_CONTENT_LENGTH: usize = 2000;

pub async fn create_post(
    service: &ForumService,
    request: &HttpRequest,
    post: CreateForumPostRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(uid) = RequireJWT::extract_person_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized: missing person id",
        )));
    };

    let content = post.content.trim();
    if content.is_empty() || content.chars().count() > MAX_CONTENT_LENGTH {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            format!("El comentario debe tener entre 1 y {MAX_CONTENT_LENGTH} caracteres"),
        )));
    }

    // 教学分配必须存在
    match storage.get_assignment_by_id(post.assignment_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                format!(
                    "La asignación académica con ID {} no existe",
                    post.assignment_id
                ),
            )));
        }
        Err(e) => {
            error!("Failed to validate assignment: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error al crear comentario",
                )),
            );
        }
    }

    match storage
        .create_forum_post(post.assignment_id, uid, content)
        .await
    {
        Ok(created) => {
            info!(
                "Forum post {} created in assignment {} by {}",
                created.id, post.assignment_id, uid
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(created, "Comentario creado")))
        }
        Err(e) => {
            error!("Failed to create forum post: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error al crear comentario",
                )),
            )
        }
    }
}
