use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// 候选服务器：一个URL加上它的优先级排名
///
/// priority数值越小越优先。候选列表由调用方在每次选择调用时提供，
/// 系统不维护任何跨调用的候选注册表。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub url: String,
    pub priority: u32,
}

impl Candidate {
    pub fn new(url: impl Into<String>, priority: u32) -> Self {
        Self {
            url: url.into(),
            priority,
        }
    }

    /// 校验候选服务器的格式
    ///
    /// URL必须是绝对的http/https地址，priority必须是正整数。
    /// 这是外壳层的输入校验；探测本身对无效URL同样会安全降级。
    pub fn validate(&self) -> Result<(), CandidateError> {
        let parsed = Url::parse(&self.url).map_err(|e| CandidateError::InvalidUrl {
            url: self.url.clone(),
            reason: e.to_string(),
        })?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(CandidateError::InvalidUrl {
                url: self.url.clone(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        if self.priority == 0 {
            return Err(CandidateError::InvalidPriority {
                url: self.url.clone(),
                value: "0".to_string(),
            });
        }

        Ok(())
    }
}

/// 候选者校验错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CandidateError {
    #[error("candidate '{url}' is not a valid URL: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("candidate '{url}' has invalid priority '{value}': must be a positive integer")]
    InvalidPriority { url: String, value: String },
    #[error("mismatched candidate lists: {urls} urls but {priorities} priorities")]
    ListLengthMismatch { urls: usize, priorities: usize },
}

/// 从逗号分隔的URL列表和优先级列表构造候选者
///
/// 两个列表按位置一一配对，长度不一致视为错误。
pub fn parse_candidate_lists(urls: &str, priorities: &str) -> Result<Vec<Candidate>, CandidateError> {
    let url_list: Vec<&str> = urls.split(',').map(str::trim).collect();
    let priority_list: Vec<&str> = priorities.split(',').map(str::trim).collect();

    if url_list.len() != priority_list.len() {
        return Err(CandidateError::ListLengthMismatch {
            urls: url_list.len(),
            priorities: priority_list.len(),
        });
    }

    let mut candidates = Vec::with_capacity(url_list.len());
    for (url, raw_priority) in url_list.into_iter().zip(priority_list) {
        let priority: u32 = raw_priority
            .parse()
            .map_err(|_| CandidateError::InvalidPriority {
                url: url.to_string(),
                value: raw_priority.to_string(),
            })?;

        let candidate = Candidate::new(url, priority);
        candidate.validate()?;
        candidates.push(candidate);
    }

    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_candidate() {
        let candidate = Candidate::new("https://gitlab.com", 4);
        assert!(candidate.validate().is_ok());

        let candidate = Candidate::new("http://app.scnt.me", 3);
        assert!(candidate.validate().is_ok());
    }

    #[test]
    fn test_zero_priority_rejected() {
        let candidate = Candidate::new("https://example.com", 0);
        let err = candidate.validate().unwrap_err();
        assert!(matches!(err, CandidateError::InvalidPriority { .. }));
    }

    #[test]
    fn test_malformed_url_rejected() {
        let candidate = Candidate::new("not a url", 1);
        assert!(matches!(
            candidate.validate().unwrap_err(),
            CandidateError::InvalidUrl { .. }
        ));

        // 相对路径也不允许
        let candidate = Candidate::new("example.com/health", 1);
        assert!(matches!(
            candidate.validate().unwrap_err(),
            CandidateError::InvalidUrl { .. }
        ));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let candidate = Candidate::new("ftp://example.com", 1);
        let err = candidate.validate().unwrap_err();
        assert!(matches!(err, CandidateError::InvalidUrl { .. }));
        assert!(err.to_string().contains("unsupported scheme"));
    }

    #[test]
    fn test_parse_candidate_lists() {
        let candidates = parse_candidate_lists(
            "https://example.com,https://another.com",
            "1,2",
        )
        .unwrap();

        assert_eq!(
            candidates,
            vec![
                Candidate::new("https://example.com", 1),
                Candidate::new("https://another.com", 2),
            ]
        );
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let candidates =
            parse_candidate_lists("https://example.com, https://another.com", "1, 2").unwrap();
        assert_eq!(candidates[1].url, "https://another.com");
        assert_eq!(candidates[1].priority, 2);
    }

    #[test]
    fn test_parse_rejects_length_mismatch() {
        let err = parse_candidate_lists("https://a.com,https://b.com", "1").unwrap_err();
        assert_eq!(
            err,
            CandidateError::ListLengthMismatch {
                urls: 2,
                priorities: 1
            }
        );
    }

    #[test]
    fn test_parse_rejects_bad_priorities() {
        // 非数字
        assert!(matches!(
            parse_candidate_lists("https://a.com", "abc").unwrap_err(),
            CandidateError::InvalidPriority { .. }
        ));
        // 负数
        assert!(matches!(
            parse_candidate_lists("https://a.com", "-1").unwrap_err(),
            CandidateError::InvalidPriority { .. }
        ));
        // 零
        assert!(matches!(
            parse_candidate_lists("https://a.com", "0").unwrap_err(),
            CandidateError::InvalidPriority { .. }
        ));
    }

    #[test]
    fn test_parse_rejects_empty_url_entry() {
        let err = parse_candidate_lists("https://a.com,,https://b.com", "1,2,3").unwrap_err();
        assert!(matches!(err, CandidateError::InvalidUrl { .. }));
    }

    #[test]
    fn test_candidate_json_roundtrip() {
        let candidate: Candidate =
            serde_json::from_str(r#"{"url":"https://example.com","priority":1}"#).unwrap();
        assert_eq!(candidate, Candidate::new("https://example.com", 1));

        let serialized = serde_json::to_value(&candidate).unwrap();
        assert_eq!(serialized["url"], "https://example.com");
        assert_eq!(serialized["priority"], 1);
    }
}
