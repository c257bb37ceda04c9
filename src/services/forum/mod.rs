pub mod create;
pub mod delete;
pub mod history;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::forum::requests::{CreateForumPostRequest, UpdateForumPostRequest};
use crate::storage::Storage;

pub struct ForumService {
    storage: Option<Arc<dyn Storage>>,
}

impl ForumService {
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

    // 某个教学分配的可见帖子
    pub async fn list_posts(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_posts(self, request, assignment_id, false).await
    }

    // 教师视角：包含软删除的帖子
    pub async fn list_posts_for_teacher(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_posts(self, request, assignment_id, true).await
    }

    // 发帖
    pub async fn create_post(
        &self,
        request: &HttpRequest,
        post: CreateForumPostRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_post(self, request, post).await
    }

    // 编辑自己的帖子
    pub async fn update_post(
        &self,
        request: &HttpRequest,
        post_id: i64,
        update: UpdateForumPostRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_post(self, request, post_id, update).await
    }

    // 删除帖子（作者本人或教师/管理员）
    pub async fn delete_post(
        &self,
        request: &HttpRequest,
        post_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_post(self, request, post_id).await
    }

    // 帖子的编辑历史
    pub async fn post_history(
        &self,
        request: &HttpRequest,
        post_id: i64,
    ) -> ActixResult<HttpResponse> {
        history::post_history(self, request, post_id).await
    }
}
