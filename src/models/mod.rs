//! API 数据模型
//!
//! 按业务区域划分，每个区域再分 entities / requests / responses。

pub mod auth;
pub mod calendar;
pub mod common;
pub mod files;
pub mod forum;
pub mod helps;
pub mod subjects;
pub mod system;
pub mod users;

pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 业务错误码
///
/// 0 表示成功；1xxx 为通用错误；2xxx 认证与人员；3xxx 日历与活动；
/// 4xxx 文件；5xxx 论坛。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    InternalServerError = 1000,
    BadRequest = 1001,
    Unauthorized = 1002,
    Forbidden = 1003,
    NotFound = 1004,
    ValidationFailed = 1005,
    RateLimited = 1006,

    AuthFailed = 2001,
    RecoveryInfoMismatch = 2002,
    PersonNotFound = 2101,

    AssignmentNotFound = 3001,
    ActivityNotFound = 3002,
    ActivityPermissionDenied = 3003,
    ActivityCreationFailed = 3004,
    DuplicateTargetsRequired = 3005,
    GroupWithoutAssignment = 3006,

    FileNotFound = 4001,
    FileUploadFailed = 4002,
    FileTypeNotAllowed = 4003,
    MultifileUploadNotAllowed = 4004,

    ForumPostNotFound = 5001,
    ForumPermissionDenied = 5002,
}

/// 应用启动时间，用于健康检查的 uptime 字段
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
