//! 插件配置
//!
//! 配置分两组：天地图相关（key、keyisvalid、random、subdomain）和其他（extramap）。

use crate::error::{Error, Result};
use crate::tiles::SUBDOMAINS;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const PLUGIN_NAME: &str = "tianditu-tools";

const SECTION_TIANDITU: [&str; 4] = ["key", "random", "keyisvalid", "subdomain"];
const SECTION_OTHER: [&str; 1] = ["extramap"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginConfig {
    pub key: String,
    #[serde(rename = "keyisvalid")]
    pub key_is_valid: bool,
    /// 随机选择子域名
    #[serde(rename = "random")]
    pub random_enabled: bool,
    pub subdomain: String,
    /// 启用其他图源
    #[serde(rename = "extramap")]
    pub extramap_enabled: bool,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            key: String::new(),
            key_is_valid: false,
            random_enabled: true,
            subdomain: SUBDOMAINS[0].to_string(),
            extramap_enabled: false,
        }
    }
}

impl PluginConfig {
    /// 读取配置文件，不存在时返回默认配置
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("配置文件 {} 不存在，使用默认配置", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if !SUBDOMAINS.contains(&self.subdomain.as_str()) {
            return Err(Error::Config(format!("无效的子域名: {}", self.subdomain)));
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 当前使用的子域名：随机模式下每次随机挑选
    pub fn active_subdomain(&self) -> String {
        if self.random_enabled {
            let mut rng = rand::thread_rng();
            if let Some(s) = SUBDOMAINS.choose(&mut rng) {
                return s.to_string();
            }
        }
        if self.subdomain.is_empty() {
            SUBDOMAINS[0].to_string()
        } else {
            self.subdomain.clone()
        }
    }
}

/// 配置项在设置存储中的完整键名
pub fn settings_key(name: &str) -> Option<String> {
    if SECTION_TIANDITU.contains(&name) {
        return Some(format!("{}/Tianditu/{}", PLUGIN_NAME, name));
    }
    if SECTION_OTHER.contains(&name) {
        return Some(format!("{}/Other/{}", PLUGIN_NAME, name));
    }
    None
}
