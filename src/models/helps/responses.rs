use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::HelpLink;

// 某个界面组件的帮助资源对
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/help.ts")]
pub struct ComponentHelps {
    pub pdf: Option<HelpLink>,
    pub video: Option<HelpLink>,
}
