use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::Datelike;
use tracing::error;

use super::SubjectService;
use crate::cache::CacheResult;
use crate::models::subjects::entities::CurrentPeriod;
use crate::models::{ApiResponse, ErrorCode};

// 当前学期一天内不会变，短缓存即可
const PERIOD_CACHE_TTL: u64 = 300;

pub async fn current_period(
    service: &SubjectService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let cache = service.get_cache(request);

    let today = chrono::Utc::now().date_naive();
    let cache_key = format!("current_period:{today}");

    if let CacheResult::Found(json) = cache.get_raw(&cache_key).await
        && let Ok(period) = serde_json::from_str::<CurrentPeriod>(&json)
    {
        return Ok(HttpResponse::Ok().json(ApiResponse::success(period, "Current period")));
    }

    // 先找包含今天的学期，再退到当前自然年的最后一个学期，最后兜底
    let period = match storage.find_period_containing(today).await {
        Ok(Some(period)) => period,
        Ok(None) => match storage.find_last_period_of_year(today.year()).await {
            Ok(Some(period)) => period,
            Ok(None) => CurrentPeriod::fallback(today),
            Err(e) => {
                error!("Failed to load last period of year: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Error al obtener periodo actual",
                    )),
                );
            }
        },
        Err(e) => {
            error!("Failed to load current period: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error al obtener periodo actual",
                )),
            );
        }
    };

    if let Ok(json) = serde_json::to_string(&period) {
        cache.insert_raw(cache_key, json, PERIOD_CACHE_TTL).await;
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(period, "Current period")))
}
