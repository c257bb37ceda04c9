use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::SystemService;

// 懒加载的全局 SYSTEM_SERVICE 实例
static SYSTEM_SERVICE: Lazy<SystemService> = Lazy::new(SystemService::new_lazy);

// HTTP处理程序
pub async fn health(req: HttpRequest) -> ActixResult<HttpResponse> {
    SYSTEM_SERVICE.health(&req).await
}

pub async fn db_health(req: HttpRequest) -> ActixResult<HttpResponse> {
    SYSTEM_SERVICE.db_health(&req).await
}

// 配置路由（探测端点不鉴权，供负载均衡与运维使用）
pub fn configure_system_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/system")
            .service(web::resource("/health").route(web::get().to(health)))
            .service(web::resource("/health/db").route(web::get().to(db_health))),
    );
}
