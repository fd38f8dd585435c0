//! 天地图 Web 服务 API
//!
//! 地名搜索 V2: http://lbs.tianditu.gov.cn/server/search2.html
//! 地理编码: http://lbs.tianditu.gov.cn/server/geocodinginterface.html
//! 逆地理编码: http://lbs.tianditu.gov.cn/server/geocoding.html

use super::ApiResponse;
use crate::error::{Error, Result};
use crate::http::{blocking_client, API_TIMEOUT};
use reqwest::blocking::Client;
use serde::Serialize;
use serde_json::Value;

/// 地名搜索 V2 参数
#[derive(Debug, Clone, Serialize)]
pub struct SearchParams {
    #[serde(rename = "keyWord")]
    pub keyword: String,
    /// 查询范围 minx,miny,maxx,maxy
    #[serde(rename = "mapBound")]
    pub map_bound: String,
    pub level: i32,
    /// 1: 普通搜索（含地铁公交） 7: 地名搜索
    #[serde(rename = "queryType")]
    pub query_type: i32,
    pub start: i32,
    pub count: i32,
    /// 1: 基本 POI 信息 2: 详细 POI 信息
    pub show: i32,
    /// 指定行政区的国标码
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specify: Option<String>,
}

impl SearchParams {
    pub fn new(keyword: &str, specify: Option<&str>) -> Self {
        Self {
            keyword: keyword.to_string(),
            map_bound: "-180,-90,180,90".to_string(),
            level: 18,
            query_type: 1,
            start: 0,
            count: 10,
            show: 1,
            specify: specify.filter(|s| !s.is_empty()).map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GeocodeParams {
    #[serde(rename = "keyWord")]
    pub keyword: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegeocodeParams {
    pub lon: f64,
    pub lat: f64,
    pub ver: i32,
}

pub struct TiandituApi {
    token: String,
    client: Client,
    base_url: String,
}

impl TiandituApi {
    const BASE_URL: &'static str = "http://api.tianditu.gov.cn";

    pub fn new(token: &str) -> Result<Self> {
        Self::with_base_url(token, Self::BASE_URL)
    }

    /// 指定服务地址（测试或代理）
    pub fn with_base_url(token: &str, base_url: &str) -> Result<Self> {
        Ok(Self {
            token: token.to_string(),
            client: blocking_client(API_TIMEOUT)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// 地名搜索 V2
    pub fn search_v2(&self, keyword: &str, specify: Option<&str>) -> ApiResponse {
        let params = SearchParams::new(keyword, specify);
        let url = format!("{}/v2/search", self.base_url);
        self.send(&url, "postStr", &params, Some("query"))
    }

    /// 地理编码
    pub fn geocoder(&self, keyword: &str) -> ApiResponse {
        let params = GeocodeParams {
            keyword: keyword.to_string(),
        };
        let url = format!("{}/geocoder", self.base_url);
        self.send(&url, "ds", &params, None)
    }

    /// 逆地理编码
    pub fn regeocoder(&self, lon: f64, lat: f64) -> ApiResponse {
        let params = RegeocodeParams { lon, lat, ver: 1 };
        let url = format!("{}/geocoder", self.base_url);
        self.send(&url, "postStr", &params, Some("geocode"))
    }

    fn send<P: Serialize>(
        &self,
        url: &str,
        param_name: &str,
        params: &P,
        query_type: Option<&str>,
    ) -> ApiResponse {
        let encoded = match serde_json::to_string(params) {
            Ok(s) => s,
            Err(e) => return ApiResponse::error(format!("序列化参数失败: {}", e)),
        };

        let mut query = vec![(param_name, encoded.as_str())];
        if let Some(t) = query_type {
            query.push(("type", t));
        }
        query.push(("tk", self.token.as_str()));

        match self.get(url, &query) {
            Ok(data) => ApiResponse::Ok(data),
            Err(e) => {
                log::warn!("天地图接口请求失败 {}: {}", url, e);
                ApiResponse::error(describe(&e))
            }
        }
    }

    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<Value> {
        let response = self.client.get(url).query(query).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }

        let bytes = response.bytes()?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

fn describe(error: &Error) -> String {
    match error {
        Error::Status(code) => format!("请求失败 Status Code:{}", code),
        e if e.is_timeout() => format!("请求超时: {}", e),
        e => e.to_string(),
    }
}
