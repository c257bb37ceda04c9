pub mod get;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::users::requests::PersonListQuery;
use crate::storage::Storage;

pub struct UserService {
    storage: Option<Arc<dyn Storage>>,
}

impl UserService {
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

    // 分页列出人员
    pub async fn list_persons(
        &self,
        request: &HttpRequest,
        query: PersonListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_persons(self, request, query).await
    }

    // 按 ID 获取人员
    pub async fn get_person(
        &self,
        request: &HttpRequest,
        person_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_person(self, request, person_id).await
    }
}
