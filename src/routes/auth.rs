use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::{ChangePasswordRequest, LoginRequest, ValidateRecoveryRequest};
use crate::services::AuthService;

// 懒加载的全局 AUTH_SERVICE 实例
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

// HTTP处理程序
pub async fn login(
    req: HttpRequest,
    login_data: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.login(&req, login_data.into_inner()).await
}

pub async fn logout(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.logout(&req).await
}

pub async fn refresh_token(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.refresh_token(&req).await
}

pub async fn profile(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.profile(&req).await
}

pub async fn validate_recovery(
    req: HttpRequest,
    recovery: web::Json<ValidateRecoveryRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .validate_recovery(&req, recovery.into_inner())
        .await
}

pub async fn change_password(
    req: HttpRequest,
    change: web::Json<ChangePasswordRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.change_password(&req, change.into_inner()).await
}

// 配置路由
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(
                web::resource("/login").route(
                    web::post()
                        .to(login)
                        // 登录限速，防撞库
                        .wrap(middlewares::RateLimit::new("auth-login", 5)),
                ),
            )
            .service(web::resource("/logout").route(web::post().to(logout)))
            .service(web::resource("/token/refresh").route(web::post().to(refresh_token)))
            .service(
                web::resource("/profile").route(
                    web::get()
                        .to(profile)
                        .wrap(middlewares::RequireJWT),
                ),
            )
            .service(
                web::resource("/recovery/validate").route(
                    web::post()
                        .to(validate_recovery)
                        .wrap(middlewares::RateLimit::new("auth-recovery", 5)),
                ),
            )
            .service(
                web::resource("/recovery/password").route(
                    web::post()
                        .to(change_password)
                        .wrap(middlewares::RateLimit::new("auth-recovery", 5)),
                ),
            ),
    );
}
