//! 统一错误类型
//!
//! 只在库内部流转；探测、状态检查和 API 请求在各自边界处把它折叠成哨兵值或响应包。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("请求失败: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP 状态码 {0}")]
    Status(u16),

    #[error("解析 JSON 失败: {0}")]
    Json(#[from] serde_json::Error),

    #[error("读写文件失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("配置错误: {0}")]
    Config(String),
}

impl Error {
    /// 是否为超时
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Http(e) if e.is_timeout())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
