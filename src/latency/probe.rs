use crate::error::{Error, Result};
use crate::http::{default_headers, fresh_client, PROBE_TIMEOUT};
use serde::Serialize;
use std::fmt;
use std::time::{Duration, Instant};

/// 测速失败时的哨兵值
pub const FAILED_SENTINEL: i64 = -1;

/// 单次测速结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeResult {
    /// 延迟（毫秒，向下取整）
    Latency(u64),
    Failed,
}

impl ProbeResult {
    /// 毫秒数，失败为 -1
    pub fn as_millis(&self) -> i64 {
        match self {
            ProbeResult::Latency(ms) => i64::try_from(*ms).unwrap_or(i64::MAX),
            ProbeResult::Failed => FAILED_SENTINEL,
        }
    }

    pub fn latency(&self) -> Option<u64> {
        match self {
            ProbeResult::Latency(ms) => Some(*ms),
            ProbeResult::Failed => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ProbeResult::Failed)
    }
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeResult::Latency(ms) => write!(f, "{} ms", ms),
            ProbeResult::Failed => f.write_str("❌"),
        }
    }
}

/// 子域名测速器
#[derive(Debug, Clone)]
pub struct Prober {
    client: reqwest::Client,
    timeout: Duration,
}

impl Default for Prober {
    fn default() -> Self {
        Self {
            client: fresh_client(),
            timeout: PROBE_TIMEOUT,
        }
    }
}

impl Prober {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            timeout: PROBE_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// 对瓦片地址发起一次 GET 并计时
    ///
    /// 只有 HTTP 200 计为成功；其他状态码、超时和连接错误都返回 `Failed`。
    pub async fn probe(&self, url: &str) -> ProbeResult {
        match self.timed_get(url).await {
            Ok(ms) => ProbeResult::Latency(ms),
            Err(e) => {
                if e.is_timeout() {
                    log::debug!("测速超时 {}", url);
                } else {
                    log::debug!("测速失败 {}: {}", url, e);
                }
                ProbeResult::Failed
            }
        }
    }

    async fn timed_get(&self, url: &str) -> Result<u64> {
        let started = Instant::now();
        let response = self
            .client
            .get(url)
            .headers(default_headers())
            .timeout(self.timeout)
            .send()
            .await?;
        let elapsed = started.elapsed();

        let status = response.status().as_u16();
        if status != 200 {
            return Err(Error::Status(status));
        }
        Ok(u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
    }
}

/// 对单个子域名测速，返回毫秒数，失败为 -1
pub async fn measure_latency(url: &str) -> i64 {
    Prober::default().probe(url).await.as_millis()
}
