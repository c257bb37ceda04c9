use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SubjectService;
use crate::config::AppConfig;
use crate::models::subjects::responses::{
    FirstAssignmentResponse, InstitutionNameResponse, StudentCountResponse, TeacherSchoolResponse,
};
use crate::models::{ApiResponse, ErrorCode};

pub async fn group_student_count(
    service: &SubjectService,
    request: &HttpRequest,
    group_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.count_group_students(group_id).await {
        Ok(count) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentCountResponse { count },
            "Student count",
        ))),
        Err(e) => {
            error!("Failed to count students for group {}: {}", group_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error al obtener cantidad de estudiantes",
                )),
            )
        }
    }
}

pub async fn school_name(
    service: &SubjectService,
    request: &HttpRequest,
    school_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_school_name(school_id).await {
        Ok(name) => {
            // 查不到时回退为配置里的展示名
            let name =
                name.unwrap_or_else(|| AppConfig::get().app.default_institution_name.clone());
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                InstitutionNameResponse { name },
                "Institution name",
            )))
        }
        Err(e) => {
            error!("Failed to load school {}: {}", school_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error al obtener nombre de institución",
                )),
            )
        }
    }
}

pub async fn teacher_school(
    service: &SubjectService,
    request: &HttpRequest,
    teacher_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.school_id_by_teacher(teacher_id).await {
        Ok(Some(school_id)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            TeacherSchoolResponse { school_id },
            "Teacher school",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "El docente no tiene asignaciones académicas",
        ))),
        Err(e) => {
            error!("Failed to resolve school for teacher {}: {}", teacher_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error al obtener colegio",
                )),
            )
        }
    }
}

pub async fn first_assignment(
    service: &SubjectService,
    request: &HttpRequest,
    group_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.first_assignment_of_group(group_id).await {
        Ok(Some(assignment_id)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            FirstAssignmentResponse { assignment_id },
            "First assignment",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GroupWithoutAssignment,
            format!("No se encontró ninguna asignación académica para el grupo {group_id}"),
        ))),
        Err(e) => {
            error!(
                "Failed to resolve first assignment for group {}: {}",
                group_id, e
            );
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error al obtener asignación académica del grupo",
                )),
            )
        }
    }
}
