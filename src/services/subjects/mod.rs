pub mod list;
pub mod period;
pub mod school;
pub mod stats;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::cache::ObjectCache;
use crate::storage::Storage;

pub struct SubjectService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubjectService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub(crate) fn get_cache(&self, request: &HttpRequest) -> Arc<dyn ObjectCache> {
        request
            .app_data::<actix_web::web::Data<Arc<dyn ObjectCache>>>()
            .expect("Cache not found in app data")
            .get_ref()
            .clone()
    }

    // 教师所授学科卡片（含活动统计）
    pub async fn list_by_teacher(
        &self,
        request: &HttpRequest,
        teacher_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_by_teacher(self, request, teacher_id).await
    }

    // 某个教学分配的活动统计
    pub async fn assignment_stats(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
    ) -> ActixResult<HttpResponse> {
        stats::assignment_stats(self, request, assignment_id).await
    }

    // 班组在册学生数
    pub async fn group_student_count(
        &self,
        request: &HttpRequest,
        group_id: i64,
    ) -> ActixResult<HttpResponse> {
        school::group_student_count(self, request, group_id).await
    }

    // 当前学期
    pub async fn current_period(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        period::current_period(self, request).await
    }

    // 学校名称
    pub async fn school_name(
        &self,
        request: &HttpRequest,
        school_id: i64,
    ) -> ActixResult<HttpResponse> {
        school::school_name(self, request, school_id).await
    }

    // 教师所属学校
    pub async fn teacher_school(
        &self,
        request: &HttpRequest,
        teacher_id: i64,
    ) -> ActixResult<HttpResponse> {
        school::teacher_school(self, request, teacher_id).await
    }

    // 班组的第一个教学分配
    pub async fn first_assignment(
        &self,
        request: &HttpRequest,
        group_id: i64,
    ) -> ActixResult<HttpResponse> {
        school::first_assignment(self, request, group_id).await
    }
}
