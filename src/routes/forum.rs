use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::forum::requests::{CreateForumPostRequest, UpdateForumPostRequest};
use crate::models::users::entities::PersonRole;
use crate::services::ForumService;
use crate::utils::{SafeAssignmentIdI64, SafePostIdI64};

// 懒加载的全局 FORUM_SERVICE 实例
static FORUM_SERVICE: Lazy<ForumService> = Lazy::new(ForumService::new_lazy);

// HTTP处理程序
pub async fn list_posts(
    req: HttpRequest,
    assignment_id: SafeAssignmentIdI64,
) -> ActixResult<HttpResponse> {
    FORUM_SERVICE.list_posts(&req, assignment_id.0).await
}

pub async fn list_posts_for_teacher(
    req: HttpRequest,
    assignment_id: SafeAssignmentIdI64,
) -> ActixResult<HttpResponse> {
    FORUM_SERVICE
        .list_posts_for_teacher(&req, assignment_id.0)
        .await
}

pub async fn create_post(
    req: HttpRequest,
    post: web::Json<CreateForumPostRequest>,
) -> ActixResult<HttpResponse> {
    FORUM_SERVICE.create_post(&req, post.into_inner()).await
}

pub async fn update_post(
    req: HttpRequest,
    post_id: SafePostIdI64,
    update: web::Json<UpdateForumPostRequest>,
) -> ActixResult<HttpResponse> {
    FORUM_SERVICE
        .update_post(&req, post_id.0, update.into_inner())
        .await
}

pub async fn delete_post(req: HttpRequest, post_id: SafePostIdI64) -> ActixResult<HttpResponse> {
    FORUM_SERVICE.delete_post(&req, post_id.0).await
}

pub async fn post_history(req: HttpRequest, post_id: SafePostIdI64) -> ActixResult<HttpResponse> {
    FORUM_SERVICE.post_history(&req, post_id.0).await
}

// 配置路由
pub fn configure_forum_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/forum")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/assignments/{assignment_id}").route(web::get().to(list_posts)),
            )
            .service(
                web::resource("/assignments/{assignment_id}/teacher").route(
                    web::get()
                        .to(list_posts_for_teacher)
                        // 教师视角包含已删除的帖子
                        .wrap(middlewares::RequireRole::new_any(PersonRole::teacher_roles())),
                ),
            )
            .service(web::resource("").route(web::post().to(create_post)))
            .service(
                web::resource("/{post_id}")
                    .route(web::put().to(update_post))
                    .route(web::delete().to(delete_post)),
            )
            .service(
                web::resource("/{post_id}/history").route(
                    web::get()
                        .to(post_history)
                        .wrap(middlewares::RequireRole::new_any(PersonRole::teacher_roles())),
                ),
            ),
    );
}
