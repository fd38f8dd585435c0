//! 天地图客户端：瓦片地址、key 格式检查、状态检查、子域名测速和搜索 / 地理编码接口

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod key;
pub mod latency;
pub mod status;
pub mod tiles;

pub use api::{ApiResponse, TiandituApi};
pub use config::{settings_key, PluginConfig};
pub use error::{Error, Result};
pub use key::{check_key_format, KeyFormat};
pub use latency::{
    fastest_index, measure_latency, nearest_index, survey, survey_latencies, survey_with, ProbeResult,
    Prober,
};
pub use status::{
    check_url_status, check_url_status_with, classify_status, StatusBody, StatusVerdict, Verdict,
};
pub use tiles::{subdomain_urls, tile_url, MapLayer, SUBDOMAINS};
