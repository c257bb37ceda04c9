use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::calendar::requests::{
    CreateActivityRequest, DateQuery, DuplicableQuery, DuplicateActivityRequest,
    DuplicateTargetsQuery, MonthQuery, MoveActivityQuery, UpdateActivityRequest,
};
use crate::models::users::entities::PersonRole;
use crate::services::CalendarService;
use crate::utils::{SafeAssignmentIdI64, SafeGroupIdI64, SafeScheduleIdI64};

// 懒加载的全局 CALENDAR_SERVICE 实例
static CALENDAR_SERVICE: Lazy<CalendarService> = Lazy::new(CalendarService::new_lazy);

// HTTP处理程序
pub async fn activities_on_date(
    req: HttpRequest,
    assignment_id: SafeAssignmentIdI64,
    query: web::Query<DateQuery>,
) -> ActixResult<HttpResponse> {
    CALENDAR_SERVICE
        .activities_on_date(&req, assignment_id.0, query.into_inner())
        .await
}

pub async fn activities_in_month(
    req: HttpRequest,
    assignment_id: SafeAssignmentIdI64,
    query: web::Query<MonthQuery>,
) -> ActixResult<HttpResponse> {
    CALENDAR_SERVICE
        .activities_in_month(&req, assignment_id.0, query.into_inner())
        .await
}

pub async fn group_activities_on_date(
    req: HttpRequest,
    group_id: SafeGroupIdI64,
    query: web::Query<DateQuery>,
) -> ActixResult<HttpResponse> {
    CALENDAR_SERVICE
        .group_activities_on_date(&req, group_id.0, query.into_inner())
        .await
}

pub async fn activity_types(req: HttpRequest) -> ActixResult<HttpResponse> {
    CALENDAR_SERVICE.activity_types(&req).await
}

pub async fn holidays(req: HttpRequest, year: web::Path<i32>) -> ActixResult<HttpResponse> {
    CALENDAR_SERVICE.holidays(&req, year.into_inner()).await
}

pub async fn create_activity(
    req: HttpRequest,
    activity: web::Json<CreateActivityRequest>,
) -> ActixResult<HttpResponse> {
    CALENDAR_SERVICE
        .create_activity(&req, activity.into_inner())
        .await
}

pub async fn activity_detail(
    req: HttpRequest,
    schedule_id: SafeScheduleIdI64,
) -> ActixResult<HttpResponse> {
    CALENDAR_SERVICE.activity_detail(&req, schedule_id.0).await
}

pub async fn update_activity(
    req: HttpRequest,
    schedule_id: SafeScheduleIdI64,
    update: web::Json<UpdateActivityRequest>,
) -> ActixResult<HttpResponse> {
    CALENDAR_SERVICE
        .update_activity(&req, schedule_id.0, update.into_inner())
        .await
}

pub async fn delete_activity(
    req: HttpRequest,
    schedule_id: SafeScheduleIdI64,
) -> ActixResult<HttpResponse> {
    CALENDAR_SERVICE.delete_activity(&req, schedule_id.0).await
}

pub async fn move_activity(
    req: HttpRequest,
    schedule_id: SafeScheduleIdI64,
    query: web::Query<MoveActivityQuery>,
) -> ActixResult<HttpResponse> {
    CALENDAR_SERVICE
        .move_activity(&req, schedule_id.0, query.into_inner())
        .await
}

pub async fn duplicable_activities(
    req: HttpRequest,
    query: web::Query<DuplicableQuery>,
) -> ActixResult<HttpResponse> {
    CALENDAR_SERVICE
        .duplicable_activities(&req, query.into_inner())
        .await
}

pub async fn duplicate_targets(
    req: HttpRequest,
    query: web::Query<DuplicateTargetsQuery>,
) -> ActixResult<HttpResponse> {
    CALENDAR_SERVICE
        .duplicate_targets(&req, query.into_inner())
        .await
}

pub async fn duplicate_activity(
    req: HttpRequest,
    duplicate_request: web::Json<DuplicateActivityRequest>,
) -> ActixResult<HttpResponse> {
    CALENDAR_SERVICE
        .duplicate_activity(&req, duplicate_request.into_inner())
        .await
}

// 配置路由
pub fn configure_calendar_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/calendar")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/assignments/{assignment_id}/date")
                    .route(web::get().to(activities_on_date)),
            )
            .service(
                web::resource("/assignments/{assignment_id}/month")
                    .route(web::get().to(activities_in_month)),
            )
            .service(
                web::resource("/groups/{group_id}/date")
                    .route(web::get().to(group_activities_on_date)),
            )
            .service(web::resource("/types").route(web::get().to(activity_types)))
            .service(web::resource("/holidays/{year}").route(web::get().to(holidays)))
            .service(
                web::resource("/activities").route(
                    web::post()
                        .to(create_activity)
                        // 只有教师（或管理员）能创建活动
                        .wrap(middlewares::RequireRole::new_any(PersonRole::teacher_roles())),
                ),
            )
            .service(
                web::resource("/activities/{schedule_id}")
                    .route(web::get().to(activity_detail))
                    .route(
                        web::put()
                            .to(update_activity)
                            // 创建教师校验在服务层完成
                            .wrap(middlewares::RequireRole::new_any(PersonRole::teacher_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_activity)
                            .wrap(middlewares::RequireRole::new_any(PersonRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/activities/{schedule_id}/move").route(
                    web::put()
                        .to(move_activity)
                        .wrap(middlewares::RequireRole::new_any(PersonRole::teacher_roles())),
                ),
            )
            .service(
                web::resource("/duplicate/activities").route(
                    web::get()
                        .to(duplicable_activities)
                        .wrap(middlewares::RequireRole::new_any(PersonRole::teacher_roles())),
                ),
            )
            .service(
                web::resource("/duplicate/targets").route(
                    web::get()
                        .to(duplicate_targets)
                        .wrap(middlewares::RequireRole::new_any(PersonRole::teacher_roles())),
                ),
            )
            .service(
                web::resource("/duplicate").route(
                    web::post()
                        .to(duplicate_activity)
                        .wrap(middlewares::RequireRole::new_any(PersonRole::teacher_roles())),
                ),
            ),
    );
}
