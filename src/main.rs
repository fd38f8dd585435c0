//! 天地图命令行工具
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use tianditu_client::{
    check_key_format, check_url_status, fastest_index, latency, subdomain_urls, tile_url,
    ApiResponse, MapLayer, TiandituApi, SUBDOMAINS,
};

#[derive(Debug, Parser)]
#[command(name = "tianditu", version, about = "天地图瓦片测速与地名搜索")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 检查 key 格式
    CheckKey { key: String },
    /// 检查瓦片地址状态
    Status {
        #[arg(long)]
        key: String,
        #[arg(long, default_value = "vec")]
        layer: MapLayer,
        #[arg(long, default_value = "t0")]
        subdomain: String,
    },
    /// 对全部子域名测速
    Survey {
        #[arg(long)]
        key: String,
        #[arg(long, default_value = "vec")]
        layer: MapLayer,
    },
    /// 地名搜索
    Search {
        keyword: String,
        #[arg(long)]
        key: String,
        /// 行政区国标码
        #[arg(long)]
        specify: Option<String>,
    },
    /// 地理编码
    Geocode {
        keyword: String,
        #[arg(long)]
        key: String,
    },
    /// 逆地理编码
    Regeocode {
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(long)]
        key: String,
    },
}

fn main() {
    env_logger::init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("tianditu: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::CheckKey { key } => {
            let format = check_key_format(&key);
            if format.wrong_length {
                println!("key 长度有误");
            }
            if format.has_special_character {
                println!("key 含有除字母数字外的其他字符");
            }
            if format.is_well_formed() {
                println!("key 格式正确");
            }
        }
        Command::Status {
            key,
            layer,
            subdomain,
        } => {
            let url = tile_url(layer.code(), &key, &subdomain);
            let url = tiles_probe_url(&url);
            let verdict = tokio::runtime::Runtime::new()?.block_on(check_url_status(&url));
            println!("{}", serde_json::to_string_pretty(&verdict)?);
        }
        Command::Survey { key, layer } => {
            let urls: Vec<String> = subdomain_urls(layer.code(), &key, &SUBDOMAINS)
                .iter()
                .map(|u| tiles_probe_url(u))
                .collect();
            let results = tokio::runtime::Runtime::new()?.block_on(latency::survey(&urls));
            let fastest = fastest_index(&results);
            println!("{} ({})", layer.name(), layer);
            for (i, (sub, result)) in SUBDOMAINS.iter().zip(&results).enumerate() {
                let mark = if Some(i) == fastest { " *" } else { "" };
                println!("{}\t{}{}", sub, result, mark);
            }
        }
        Command::Search {
            keyword,
            key,
            specify,
        } => print_response(TiandituApi::new(&key)?.search_v2(&keyword, specify.as_deref()))?,
        Command::Geocode { keyword, key } => {
            print_response(TiandituApi::new(&key)?.geocoder(&keyword))?
        }
        Command::Regeocode { lon, lat, key } => {
            print_response(TiandituApi::new(&key)?.regeocoder(lon, lat))?
        }
    }
    Ok(())
}

/// 测速时请求的固定瓦片
fn tiles_probe_url(template: &str) -> String {
    tianditu_client::tiles::resolve_tile(template, 0, 0, 0)
}

fn print_response(response: ApiResponse) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(&response.into_json())?);
    Ok(())
}
