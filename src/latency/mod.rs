//! 子域名测速

mod probe;
mod survey;

pub use probe::{measure_latency, ProbeResult, Prober, FAILED_SENTINEL};
pub use survey::{
    fastest_index, format_results, nearest_index, survey, survey_latencies, survey_with, POOL_SIZE,
};
