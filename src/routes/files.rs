use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::files::requests::UploadQuery;
use crate::models::users::entities::PersonRole;
use crate::services::FileService;
use crate::utils::SafeFileIdI64;

// 懒加载的全局 FILE_SERVICE 实例
static FILE_SERVICE: Lazy<FileService> = Lazy::new(FileService::new_lazy);

// HTTP处理程序
pub async fn upload_file(
    req: HttpRequest,
    query: web::Query<UploadQuery>,
    payload: Multipart,
) -> ActixResult<HttpResponse> {
    FILE_SERVICE.upload(&req, query.into_inner(), payload).await
}

pub async fn download_file(req: HttpRequest, file_id: SafeFileIdI64) -> ActixResult<HttpResponse> {
    FILE_SERVICE.download(&req, file_id.0).await
}

// 配置路由
pub fn configure_file_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/files")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("").route(
                    web::post()
                        .to(upload_file)
                        // 附件由教师在创建/编辑活动时上传
                        .wrap(middlewares::RequireRole::new_any(PersonRole::teacher_roles())),
                ),
            )
            .service(web::resource("/{file_id}").route(web::get().to(download_file))),
    );
}
