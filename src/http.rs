//! HTTP 公共设置：固定请求头、超时和共享客户端

use crate::error::Result;
use reqwest::header::{HeaderMap, HeaderValue, REFERER, USER_AGENT};
use std::time::Duration;

/// 天地图首页，服务端要求 Referer 与之匹配
pub const TIANDITU_HOME_URL: &str = "https://www.tianditu.gov.cn/";

pub const CLIENT_USER_AGENT: &str = "Mozilla/5.0 QGIS/32400/Windows 10 Version 2009";

/// 子域名测速超时
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(8);

/// 搜索 / 地理编码接口超时
pub const API_TIMEOUT: Duration = Duration::from_secs(8);

/// 瓦片地址状态检查超时
pub const STATUS_TIMEOUT: Duration = Duration::from_secs(10);

/// 每次请求都携带的固定请求头
pub fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));
    headers.insert(REFERER, HeaderValue::from_static(TIANDITU_HOME_URL));
    headers
}

/// 创建异步客户端（超时由每个请求单独指定）
pub fn async_client() -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .default_headers(default_headers())
        .build()?;
    Ok(client)
}

/// 创建阻塞客户端
pub fn blocking_client(timeout: Duration) -> Result<reqwest::blocking::Client> {
    let client = reqwest::blocking::Client::builder()
        .default_headers(default_headers())
        .timeout(timeout)
        .build()?;
    Ok(client)
}

/// 每次测速或状态检查新建的客户端
///
/// 连接池绑定在首次使用它的 runtime 上，不能跨 runtime 复用。
pub(crate) fn fresh_client() -> reqwest::Client {
    async_client().unwrap_or_else(|e| {
        log::error!("创建 HTTP 客户端失败，使用默认配置: {}", e);
        reqwest::Client::new()
    })
}
