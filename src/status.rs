//! 瓦片地址状态检查

use crate::error::Result;
use crate::http::{default_headers, fresh_client, STATUS_TIMEOUT};
use serde::{Deserialize, Serialize};

/// 状态分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Normal,
    /// 非法 key
    InvalidKey,
    /// 权限类型错误
    WrongPermissionType,
    Unknown,
}

impl Verdict {
    /// 天地图返回的数字代码
    pub fn code(&self) -> i64 {
        match self {
            Verdict::Normal => 0,
            Verdict::InvalidKey => 1,
            Verdict::WrongPermissionType => 12,
            Verdict::Unknown => 1000,
        }
    }

    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Verdict::Normal,
            1 => Verdict::InvalidKey,
            12 => Verdict::WrongPermissionType,
            _ => Verdict::Unknown,
        }
    }
}

/// 403 响应体
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StatusBody {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub resolve: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusVerdict {
    pub verdict: Verdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve: Option<String>,
}

impl StatusVerdict {
    pub fn normal() -> Self {
        Self {
            verdict: Verdict::Normal,
            msg: None,
            resolve: None,
        }
    }

    pub fn unknown(resolve: impl Into<String>) -> Self {
        Self {
            verdict: Verdict::Unknown,
            msg: Some("unknown error".to_string()),
            resolve: Some(resolve.into()),
        }
    }

    pub fn is_normal(&self) -> bool {
        self.verdict == Verdict::Normal
    }
}

/// 根据状态码和响应体分类
pub fn classify_status(status: u16, body: Option<&StatusBody>) -> StatusVerdict {
    match (status, body) {
        (200, _) => StatusVerdict::normal(),
        (403, Some(body)) => StatusVerdict {
            verdict: body.code.map(Verdict::from_code).unwrap_or(Verdict::Unknown),
            msg: body.msg.clone(),
            resolve: body.resolve.clone(),
        },
        _ => StatusVerdict::unknown(format!("error code:{}", status)),
    }
}

/// 请求瓦片地址并分类，任何失败都折叠为 `Unknown`
pub async fn check_url_status(url: &str) -> StatusVerdict {
    check_url_status_with(&fresh_client(), url).await
}

pub async fn check_url_status_with(client: &reqwest::Client, url: &str) -> StatusVerdict {
    match fetch_status(client, url).await {
        Ok((status, body)) => {
            let verdict = classify_status(status, body.as_ref());
            log::debug!("状态检查 {} -> {:?}", url, verdict.verdict);
            verdict
        }
        Err(e) => {
            log::warn!("状态检查失败 {}: {}", url, e);
            StatusVerdict::unknown(e.to_string())
        }
    }
}

async fn fetch_status(client: &reqwest::Client, url: &str) -> Result<(u16, Option<StatusBody>)> {
    let response = client
        .get(url)
        .headers(default_headers())
        .timeout(STATUS_TIMEOUT)
        .send()
        .await?;

    let status = response.status().as_u16();
    if status != 403 {
        return Ok((status, None));
    }

    let bytes = response.bytes().await?;
    let body = match serde_json::from_slice::<StatusBody>(&bytes) {
        Ok(body) => Some(body),
        Err(e) => {
            log::debug!("403 响应体无法解析: {}", e);
            None
        }
    };
    Ok((status, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(code: i64, msg: &str, resolve: &str) -> StatusBody {
        StatusBody {
            code: Some(code),
            msg: Some(msg.to_string()),
            resolve: Some(resolve.to_string()),
        }
    }

    #[test]
    fn test_ok_is_normal() {
        assert_eq!(classify_status(200, None), StatusVerdict::normal());
        assert!(classify_status(200, Some(&body(1, "x", "y"))).is_normal());
    }

    #[test]
    fn test_forbidden_invalid_key() {
        let verdict = classify_status(403, Some(&body(1, "bad key", "get new key")));
        assert_eq!(verdict.verdict, Verdict::InvalidKey);
        assert_eq!(verdict.msg.as_deref(), Some("bad key"));
        assert_eq!(verdict.resolve.as_deref(), Some("get new key"));
    }

    #[test]
    fn test_forbidden_wrong_permission() {
        let verdict = classify_status(403, Some(&body(12, "权限类型错误", "申请浏览器端key")));
        assert_eq!(verdict.verdict, Verdict::WrongPermissionType);
        assert_eq!(verdict.verdict.code(), 12);
    }

    #[test]
    fn test_forbidden_missing_fields() {
        let verdict = classify_status(403, Some(&StatusBody::default()));
        assert_eq!(verdict.verdict, Verdict::Unknown);
        assert_eq!(verdict.msg, None);
        assert_eq!(verdict.resolve, None);

        let verdict = classify_status(403, None);
        assert_eq!(verdict.verdict, Verdict::Unknown);
        assert_eq!(verdict.resolve.as_deref(), Some("error code:403"));
    }

    #[test]
    fn test_other_status_unknown() {
        let verdict = classify_status(500, None);
        assert_eq!(verdict.verdict, Verdict::Unknown);
        assert_eq!(verdict.msg.as_deref(), Some("unknown error"));
        assert!(verdict.resolve.unwrap().contains("500"));
    }

    #[test]
    fn test_verdict_serializes_snake_case() {
        let value = serde_json::to_value(classify_status(500, None)).unwrap();
        assert_eq!(value["verdict"], "unknown");
        let value = serde_json::to_value(StatusVerdict::normal()).unwrap();
        assert_eq!(value, serde_json::json!({"verdict": "normal"}));
    }

    #[test]
    fn test_status_body_lenient() {
        let parsed: StatusBody = serde_json::from_str(r#"{"code":1,"extra":true}"#).unwrap();
        assert_eq!(parsed.code, Some(1));
        assert_eq!(parsed.msg, None);
    }
}
