use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::HelpService;
use crate::models::helps::entities::HelpKind;
use crate::models::helps::responses::ComponentHelps;
use crate::models::{ApiResponse, ErrorCode};

pub async fn component_helps(
    service: &HelpService,
    request: &HttpRequest,
    component_code: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 组件代码对应 VIDEO，PDF 固定在代码 + 1
    let video_code = component_code as i32;
    let pdf_code = video_code + 1;

    match storage.help_links_by_codes(video_code, pdf_code).await {
        Ok(rows) => {
            let mut helps = ComponentHelps {
                pdf: None,
                video: None,
            };

            for (link, kind) in rows {
                // kind 列优先；历史数据没有 kind 时按代码规则区分
                match kind {
                    Some(HelpKind::Pdf) => helps.pdf = Some(link),
                    Some(HelpKind::Video) => helps.video = Some(link),
                    None if link.application_code == pdf_code => helps.pdf = Some(link),
                    None if link.application_code == video_code => helps.video = Some(link),
                    None => {}
                }
            }

            Ok(HttpResponse::Ok().json(ApiResponse::success(helps, "Component helps")))
        }
        Err(e) => {
            error!(
                "Failed to load helps for component {}: {}",
                component_code, e
            );
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error al obtener ayudas",
                )),
            )
        }
    }
}
