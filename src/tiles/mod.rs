//! 天地图瓦片地址

mod types;

pub use types::MapLayer;

/// 天地图瓦片子域名
pub const SUBDOMAINS: [&str; 8] = ["t0", "t1", "t2", "t3", "t4", "t5", "t6", "t7"];

/// 返回天地图 XYZ 瓦片地址模板
///
/// `{x}`、`{y}`、`{z}` 原样保留，由调用方替换为瓦片坐标。不做任何校验，
/// 错误的图层或 key 只会得到一个请求失败的地址。
pub fn tile_url(map_type: &str, token: &str, subdomain: &str) -> String {
    let mut url = format!("https://{}.tianditu.gov.cn/", subdomain);
    url.push_str(&format!(
        "{}_w/wmts?SERVICE=WMTS&REQUEST=GetTile&VERSION=1.0.0&LAYER={}",
        map_type, map_type
    ));
    url.push_str("&STYLE=default&TILEMATRIXSET=w&FORMAT=tiles&TileCol={x}&TileRow={y}&TileMatrix={z}");
    url.push_str(&format!("&tk={}", token));
    url
}

/// 为每个子域名生成一条瓦片地址，顺序与输入一致
pub fn subdomain_urls<S: AsRef<str>>(map_type: &str, token: &str, subdomains: &[S]) -> Vec<String> {
    subdomains
        .iter()
        .map(|s| tile_url(map_type, token, s.as_ref()))
        .collect()
}

/// 把模板中的占位符替换为具体瓦片坐标
pub fn resolve_tile(template: &str, x: u32, y: u32, z: u32) -> String {
    template
        .replace("{x}", &x.to_string())
        .replace("{y}", &y.to_string())
        .replace("{z}", &z.to_string())
}
