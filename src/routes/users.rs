use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::PersonRole;
use crate::models::users::requests::PersonListQuery;
use crate::services::UserService;
use crate::utils::SafeIdI64;

// 懒加载的全局 USER_SERVICE 实例
static USER_SERVICE: Lazy<UserService> = Lazy::new(UserService::new_lazy);

// HTTP处理程序
pub async fn list_persons(
    req: HttpRequest,
    query: web::Query<PersonListQuery>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.list_persons(&req, query.into_inner()).await
}

pub async fn get_person(req: HttpRequest, person_id: SafeIdI64) -> ActixResult<HttpResponse> {
    USER_SERVICE.get_person(&req, person_id.0).await
}

// 配置路由
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("").route(
                    web::get()
                        .to(list_persons)
                        // 人员目录仅管理员可见
                        .wrap(middlewares::RequireRole::new_any(PersonRole::admin_roles())),
                ),
            )
            .service(web::resource("/{id}").route(web::get().to(get_person))),
    );
}
