use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::PersonRole;
use crate::services::SubjectService;
use crate::utils::{SafeAssignmentIdI64, SafeGroupIdI64, SafeSchoolIdI64, SafeTeacherIdI64};

// 懒加载的全局 SUBJECT_SERVICE 实例
static SUBJECT_SERVICE: Lazy<SubjectService> = Lazy::new(SubjectService::new_lazy);

// HTTP处理程序
pub async fn list_by_teacher(
    req: HttpRequest,
    teacher_id: SafeTeacherIdI64,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.list_by_teacher(&req, teacher_id.0).await
}

pub async fn assignment_stats(
    req: HttpRequest,
    assignment_id: SafeAssignmentIdI64,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.assignment_stats(&req, assignment_id.0).await
}

pub async fn group_student_count(
    req: HttpRequest,
    group_id: SafeGroupIdI64,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.group_student_count(&req, group_id.0).await
}

pub async fn current_period(req: HttpRequest) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.current_period(&req).await
}

pub async fn school_name(
    req: HttpRequest,
    school_id: SafeSchoolIdI64,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.school_name(&req, school_id.0).await
}

pub async fn teacher_school(
    req: HttpRequest,
    teacher_id: SafeTeacherIdI64,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.teacher_school(&req, teacher_id.0).await
}

pub async fn first_assignment(
    req: HttpRequest,
    group_id: SafeGroupIdI64,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.first_assignment(&req, group_id.0).await
}

// 配置路由
pub fn configure_subject_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/subjects")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/teacher/{teacher_id}").route(
                    web::get()
                        .to(list_by_teacher)
                        // 学科卡片是教师工作台的入口
                        .wrap(middlewares::RequireRole::new_any(PersonRole::teacher_roles())),
                ),
            )
            .service(
                web::resource("/teacher/{teacher_id}/school").route(
                    web::get()
                        .to(teacher_school)
                        .wrap(middlewares::RequireRole::new_any(PersonRole::teacher_roles())),
                ),
            )
            .service(
                web::resource("/assignments/{assignment_id}/stats").route(
                    web::get()
                        .to(assignment_stats)
                        .wrap(middlewares::RequireRole::new_any(PersonRole::teacher_roles())),
                ),
            )
            .service(
                web::resource("/groups/{group_id}/students/count")
                    .route(web::get().to(group_student_count)),
            )
            .service(
                web::resource("/groups/{group_id}/first-assignment").route(
                    web::get()
                        .to(first_assignment)
                        .wrap(middlewares::RequireRole::new_any(PersonRole::teacher_roles())),
                ),
            )
            .service(web::resource("/period/current").route(web::get().to(current_period)))
            .service(web::resource("/schools/{school_id}/name").route(web::get().to(school_name))),
    );
}
