use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::services::HelpService;
use crate::utils::SafeIdI64;

// 懒加载的全局 HELP_SERVICE 实例
static HELP_SERVICE: Lazy<HelpService> = Lazy::new(HelpService::new_lazy);

// HTTP处理程序
pub async fn component_helps(
    req: HttpRequest,
    component_code: SafeIdI64,
) -> ActixResult<HttpResponse> {
    HELP_SERVICE.component_helps(&req, component_code.0).await
}

// 配置路由
pub fn configure_help_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/helps")
            .wrap(middlewares::RequireJWT)
            .service(web::resource("/component/{id}").route(web::get().to(component_helps))),
    );
}
