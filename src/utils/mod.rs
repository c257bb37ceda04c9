pub mod extractor;
pub mod file_magic;
pub mod file_path;
pub mod hypertext;
pub mod jwt;
pub mod mime;
pub mod parameter_error_handler;
pub mod password;
pub mod random_code;
pub mod sql;
pub mod validate;

pub use extractor::{
    SafeAssignmentIdI64, SafeFileIdI64, SafeGroupIdI64, SafeIdI64, SafePostIdI64,
    SafeScheduleIdI64, SafeSchoolIdI64, SafeTeacherIdI64,
};
pub use file_magic::validate_magic_bytes;
pub use mime::content_type_for;
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use sql::escape_like_pattern;
