pub mod create;
pub mod delete;
pub mod detail;
pub mod duplicate;
pub mod list;
pub mod move_date;
pub mod types;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::calendar::requests::{
    CreateActivityRequest, DateQuery, DuplicableQuery, DuplicateActivityRequest,
    DuplicateTargetsQuery, MonthQuery, MoveActivityQuery, UpdateActivityRequest,
};
use crate::storage::Storage;

pub struct CalendarService {
    storage: Option<Arc<dyn Storage>>,
}

impl CalendarService {
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

    // 某个教学分配某天的活动
    pub async fn activities_on_date(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
        query: DateQuery,
    ) -> ActixResult<HttpResponse> {
        list::activities_on_date(self, request, assignment_id, query).await
    }

    // 某个教学分配某个月的活动
    pub async fn activities_in_month(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
        query: MonthQuery,
    ) -> ActixResult<HttpResponse> {
        list::activities_in_month(self, request, assignment_id, query).await
    }

    // 班组某天的活动（所有教师）
    pub async fn group_activities_on_date(
        &self,
        request: &HttpRequest,
        group_id: i64,
        query: DateQuery,
    ) -> ActixResult<HttpResponse> {
        list::group_activities_on_date(self, request, group_id, query).await
    }

    // 在用的活动类型
    pub async fn activity_types(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        types::activity_types(self, request).await
    }

    // 节假日（暂无数据表，返回空集）
    pub async fn holidays(&self, request: &HttpRequest, year: i32) -> ActixResult<HttpResponse> {
        types::holidays(self, request, year).await
    }

    // 创建活动
    pub async fn create_activity(
        &self,
        request: &HttpRequest,
        activity: CreateActivityRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_activity(self, request, activity).await
    }

    // 活动完整详情
    pub async fn activity_detail(
        &self,
        request: &HttpRequest,
        schedule_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::activity_detail(self, request, schedule_id).await
    }

    // 更新活动（仅创建教师）
    pub async fn update_activity(
        &self,
        request: &HttpRequest,
        schedule_id: i64,
        update: UpdateActivityRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_activity(self, request, schedule_id, update).await
    }

    // 删除活动（仅创建教师；物理删除）
    pub async fn delete_activity(
        &self,
        request: &HttpRequest,
        schedule_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_activity(self, request, schedule_id).await
    }

    // 拖拽换期
    pub async fn move_activity(
        &self,
        request: &HttpRequest,
        schedule_id: i64,
        query: MoveActivityQuery,
    ) -> ActixResult<HttpResponse> {
        move_date::move_activity(self, request, schedule_id, query).await
    }

    // 可复制的活动列表
    pub async fn duplicable_activities(
        &self,
        request: &HttpRequest,
        query: DuplicableQuery,
    ) -> ActixResult<HttpResponse> {
        duplicate::duplicable_activities(self, request, query).await
    }

    // 可作为复制目标的班组
    pub async fn duplicate_targets(
        &self,
        request: &HttpRequest,
        query: DuplicateTargetsQuery,
    ) -> ActixResult<HttpResponse> {
        duplicate::duplicate_targets(self, request, query).await
    }

    // 复制活动到多个班组
    pub async fn duplicate_activity(
        &self,
        request: &HttpRequest,
        duplicate_request: DuplicateActivityRequest,
    ) -> ActixResult<HttpResponse> {
        duplicate::duplicate_activity(self, request, duplicate_request).await
    }
}
