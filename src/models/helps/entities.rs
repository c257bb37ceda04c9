use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 帮助资源类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/help.ts")]
pub enum HelpKind {
    Pdf,
    Video,
}

impl HelpKind {
    /// kind 列的解析，大小写不敏感；历史数据可能为空
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "PDF" => Some(HelpKind::Pdf),
            "VIDEO" => Some(HelpKind::Video),
            _ => None,
        }
    }
}

// 一条帮助链接
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/help.ts")]
pub struct HelpLink {
    pub id: i64,
    pub application_code: i32,
    pub name: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse() {
        assert_eq!(HelpKind::parse("pdf"), Some(HelpKind::Pdf));
        assert_eq!(HelpKind::parse(" VIDEO "), Some(HelpKind::Video));
        assert_eq!(HelpKind::parse("enlace"), None);
    }
}
