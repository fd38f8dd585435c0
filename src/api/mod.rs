//! 天地图搜索 / 地理编码接口

mod tianditu;

pub use tianditu::{GeocodeParams, RegeocodeParams, SearchParams, TiandituApi};

use serde_json::{json, Value};

/// 接口调用结果
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Ok(Value),
    Error { message: String, code: i32 },
}

impl ApiResponse {
    pub const OK_CODE: i32 = 1;
    pub const ERROR_CODE: i32 = -1;

    pub fn error(message: impl Into<String>) -> Self {
        ApiResponse::Error {
            message: message.into(),
            code: Self::ERROR_CODE,
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            ApiResponse::Ok(_) => Self::OK_CODE,
            ApiResponse::Error { code, .. } => *code,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, ApiResponse::Ok(_))
    }

    pub fn data(&self) -> Option<&Value> {
        match self {
            ApiResponse::Ok(data) => Some(data),
            ApiResponse::Error { .. } => None,
        }
    }

    /// 转为 `{"code": 1, "data": ...}` / `{"code": -1, "message": ...}`
    pub fn into_json(self) -> Value {
        match self {
            ApiResponse::Ok(data) => json!({ "code": Self::OK_CODE, "data": data }),
            ApiResponse::Error { message, code } => json!({ "code": code, "message": message }),
        }
    }
}
