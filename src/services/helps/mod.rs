pub mod component;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct HelpService {
    storage: Option<Arc<dyn Storage>>,
}

impl HelpService {
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

    // 某个界面组件的帮助资源对（PDF + VIDEO）
    pub async fn component_helps(
        &self,
        request: &HttpRequest,
        component_code: i64,
    ) -> ActixResult<HttpResponse> {
        component::component_helps(self, request, component_code).await
    }
}
