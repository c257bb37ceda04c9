use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 存活探测
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/system.ts")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub server_time: chrono::DateTime<chrono::Utc>,
    pub uptime_seconds: i64,
}

// 数据库探测
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/system.ts")]
pub struct DbHealthResponse {
    pub reachable: bool,
    pub backend: String,
}
