use super::probe::{ProbeResult, Prober};
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// 并发测速的线程数
pub const POOL_SIZE: usize = 4;

/// 对子域名地址列表并发测速
///
/// 每次调用新建一个大小为 4 的并发池，等待全部探测结束后返回，
/// 结果顺序与输入一致。
pub async fn survey<S: AsRef<str>>(urls: &[S]) -> Vec<ProbeResult> {
    survey_with(&Prober::default(), urls).await
}

pub async fn survey_with<S: AsRef<str>>(prober: &Prober, urls: &[S]) -> Vec<ProbeResult> {
    let semaphore = Arc::new(Semaphore::new(POOL_SIZE));

    let handles: Vec<_> = urls
        .iter()
        .map(|url| {
            let url = url.as_ref().to_string();
            let prober = prober.clone();
            let semaphore = semaphore.clone();

            tokio::spawn(async move {
                let _permit = match semaphore.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(_) => return ProbeResult::Failed,
                };
                prober.probe(&url).await
            })
        })
        .collect();

    // join_all 按句柄顺序返回，与完成顺序无关
    join_all(handles)
        .await
        .into_iter()
        .map(|joined| {
            joined.unwrap_or_else(|e| {
                log::warn!("测速任务异常退出: {}", e);
                ProbeResult::Failed
            })
        })
        .collect()
}

/// 测速并格式化为显示字符串：`"<毫秒> ms"` 或 `"❌"`
pub async fn survey_latencies<S: AsRef<str>>(urls: &[S]) -> Vec<String> {
    format_results(&survey(urls).await)
}

pub fn format_results(results: &[ProbeResult]) -> Vec<String> {
    results.iter().map(ToString::to_string).collect()
}

/// 返回与目标值差值最小的下标，差值相同时取靠前的一个
pub fn nearest_index(values: &[f64], target: f64) -> Option<usize> {
    let mut min_difference = f64::INFINITY;
    let mut nearest = None;

    for (i, value) in values.iter().enumerate() {
        let difference = (value - target).abs();
        if difference < min_difference {
            min_difference = difference;
            nearest = Some(i);
        }
    }

    nearest
}

/// 延迟最低的成功结果下标
pub fn fastest_index(results: &[ProbeResult]) -> Option<usize> {
    results
        .iter()
        .enumerate()
        .filter_map(|(i, r)| r.latency().map(|ms| (i, ms)))
        .min_by_key(|(_, ms)| *ms)
        .map(|(i, _)| i)
}
