use std::fmt;
use std::str::FromStr;

/// 天地图图层
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapLayer {
    /// 矢量底图
    Vec,
    /// 矢量注记
    Cva,
    /// 影像底图
    Img,
    /// 影像注记
    Cia,
    /// 地形晕渲
    Ter,
    /// 地形注记
    Cta,
    /// 全球境界
    Ibo,
}

impl MapLayer {
    pub const ALL: [MapLayer; 7] = [
        MapLayer::Vec,
        MapLayer::Cva,
        MapLayer::Img,
        MapLayer::Cia,
        MapLayer::Ter,
        MapLayer::Cta,
        MapLayer::Ibo,
    ];

    /// URL 中使用的图层代码
    pub fn code(&self) -> &'static str {
        match self {
            MapLayer::Vec => "vec",
            MapLayer::Cva => "cva",
            MapLayer::Img => "img",
            MapLayer::Cia => "cia",
            MapLayer::Ter => "ter",
            MapLayer::Cta => "cta",
            MapLayer::Ibo => "ibo",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MapLayer::Vec => "天地图-矢量底图",
            MapLayer::Cva => "天地图-矢量注记",
            MapLayer::Img => "天地图-影像底图",
            MapLayer::Cia => "天地图-影像注记",
            MapLayer::Ter => "天地图-地形晕渲",
            MapLayer::Cta => "天地图-地形注记",
            MapLayer::Ibo => "天地图-全球境界",
        }
    }
}

impl fmt::Display for MapLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for MapLayer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        MapLayer::ALL
            .into_iter()
            .find(|layer| layer.code() == code)
            .ok_or_else(|| format!("未知图层: {}", s))
    }
}
