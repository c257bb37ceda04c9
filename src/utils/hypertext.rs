//! 活动富文本的组装与还原
//!
//! 三类活动共用 resource_hypertexts 一个字段：
//! - 富文本活动直接存编辑器内容
//! - 视频活动存视频链接，按顺序一行一条
//! - 问题型活动存编号后的问题列表，一行一条
//!
//! 还原时按已知视频站点域名识别视频行。

use crate::models::calendar::entities::EngagementVideo;
use crate::models::calendar::requests::{EngagementVideoRequest, PromptQuestionRequest};

const VIDEO_HOSTS: [&str; 4] = ["youtube.com", "youtu.be", "vimeo.com", "dailymotion.com"];

/// 从创建/更新请求组装最终的富文本内容
///
/// 优先级：显式富文本 > 视频链接 > 问题列表；都为空时返回 None。
pub fn compose(
    hypertext: Option<&str>,
    videos: Option<&[EngagementVideoRequest]>,
    questions: Option<&[PromptQuestionRequest]>,
) -> Option<String> {
    if let Some(text) = hypertext
        && !text.is_empty()
    {
        return Some(text.to_string());
    }

    if let Some(videos) = videos {
        let mut ordered: Vec<&EngagementVideoRequest> =
            videos.iter().filter(|v| !v.url.is_empty()).collect();
        if !ordered.is_empty() {
            ordered.sort_by_key(|v| v.position);
            return Some(
                ordered
                    .iter()
                    .map(|v| v.url.as_str())
                    .collect::<Vec<_>>()
                    .join("\n"),
            );
        }
    }

    if let Some(questions) = questions {
        let mut ordered: Vec<&PromptQuestionRequest> = questions
            .iter()
            .filter(|q| !q.statement.is_empty())
            .collect();
        if !ordered.is_empty() {
            ordered.sort_by_key(|q| q.position);
            return Some(
                ordered
                    .iter()
                    .enumerate()
                    .map(|(index, q)| format!("{}. {}", index + 1, q.statement))
                    .collect::<Vec<_>>()
                    .join("\n"),
            );
        }
    }

    None
}

/// 从富文本中识别视频链接（用于活动详情回显）
pub fn extract_videos(hypertext: &str) -> Vec<EngagementVideo> {
    hypertext
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| VIDEO_HOSTS.iter().any(|host| line.contains(host)))
        .enumerate()
        .map(|(index, url)| EngagementVideo {
            url: url.to_string(),
            position: (index + 1) as i32,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(url: &str, position: i32) -> EngagementVideoRequest {
        EngagementVideoRequest {
            url: url.to_string(),
            position,
        }
    }

    fn question(statement: &str, position: i32) -> PromptQuestionRequest {
        PromptQuestionRequest {
            statement: statement.to_string(),
            position,
        }
    }

    #[test]
    fn test_explicit_hypertext_wins() {
        let videos = [video("https://youtu.be/abc", 1)];
        let result = compose(Some("<p>contenido</p>"), Some(&videos), None);
        assert_eq!(result.as_deref(), Some("<p>contenido</p>"));
    }

    #[test]
    fn test_videos_joined_in_order() {
        let videos = [
            video("https://youtu.be/b", 2),
            video("https://youtu.be/a", 1),
            video("", 3),
        ];
        let result = compose(None, Some(&videos), None).unwrap();
        assert_eq!(result, "https://youtu.be/a\nhttps://youtu.be/b");
    }

    #[test]
    fn test_questions_are_numbered() {
        let questions = [
            question("¿Por qué llueve?", 2),
            question("¿Qué es el agua?", 1),
        ];
        let result = compose(None, None, Some(&questions)).unwrap();
        assert_eq!(result, "1. ¿Qué es el agua?\n2. ¿Por qué llueve?");
    }

    #[test]
    fn test_empty_inputs_give_none() {
        assert_eq!(compose(None, None, None), None);
        assert_eq!(compose(Some(""), Some(&[]), Some(&[])), None);
    }

    #[test]
    fn test_extract_videos_roundtrip() {
        let videos = [
            video("https://youtu.be/a", 1),
            video("https://vimeo.com/123", 2),
        ];
        let text = compose(None, Some(&videos), None).unwrap();
        let parsed = extract_videos(&text);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].url, "https://youtu.be/a");
        assert_eq!(parsed[0].position, 1);
        assert_eq!(parsed[1].url, "https://vimeo.com/123");
    }

    #[test]
    fn test_extract_ignores_plain_text() {
        let parsed = extract_videos("1. ¿Qué es el agua?\n2. ¿Por qué llueve?");
        assert!(parsed.is_empty());
    }
}
