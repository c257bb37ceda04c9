//! 路径参数安全提取器
//!
//! 把路径段解析为正整数 ID，格式非法时直接返回统一的 400 响应，
//! 处理函数拿到的 ID 一定有效。

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, HttpResponse};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

macro_rules! define_safe_id_extractor {
    ($name:ident, $param:literal) => {
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                let parsed = req
                    .match_info()
                    .get($param)
                    .and_then(|raw| raw.parse::<i64>().ok())
                    .filter(|id| *id > 0);

                match parsed {
                    Some(id) => ready(Ok($name(id))),
                    None => {
                        let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
                            ErrorCode::BadRequest,
                            concat!("Invalid path parameter: ", $param),
                        ));
                        ready(Err(actix_web::error::InternalError::from_response(
                            concat!("Invalid path parameter: ", $param),
                            response,
                        )
                        .into()))
                    }
                }
            }
        }
    };
}

define_safe_id_extractor!(SafeIdI64, "id");
define_safe_id_extractor!(SafeAssignmentIdI64, "assignment_id");
define_safe_id_extractor!(SafeGroupIdI64, "group_id");
define_safe_id_extractor!(SafeScheduleIdI64, "schedule_id");
define_safe_id_extractor!(SafeFileIdI64, "file_id");
define_safe_id_extractor!(SafePostIdI64, "post_id");
define_safe_id_extractor!(SafeTeacherIdI64, "teacher_id");
define_safe_id_extractor!(SafeSchoolIdI64, "school_id");
