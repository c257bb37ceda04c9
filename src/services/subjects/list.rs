use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SubjectService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_by_teacher(
    service: &SubjectService,
    request: &HttpRequest,
    teacher_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let mut cards = match storage.list_taught_subjects(teacher_id).await {
        Ok(cards) => cards,
        Err(e) => {
            error!("Failed to list taught subjects: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error al obtener asignaturas",
                )),
            );
        }
    };

    // 每张卡补上活动统计；单个分配统计失败不影响整页
    let today = chrono::Utc::now().date_naive();
    for card in &mut cards {
        match storage.activity_stats(card.assignment_id, today).await {
            Ok(stats) => card.stats = Some(stats),
            Err(e) => {
                error!(
                    "Failed to load activity stats for assignment {}: {}",
                    card.assignment_id, e
                );
            }
        }
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(cards, "Subjects")))
}
