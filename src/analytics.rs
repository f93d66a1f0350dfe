use crate::telemetry::{
    RegionGroups, TelemetryError, TelemetryRecord, TelemetryResult, load_telemetry_by_region,
};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;
use tracing::debug;

/// Rank used for the latency percentile.
const P95_RANK: f64 = 0.95;

/// Body of `POST /analytics`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalyticsRequest {
    pub regions: Vec<String>,
    /// Accepts a JSON integer, a float with no fractional part, or a numeric string.
    #[serde(deserialize_with = "deserialize_threshold")]
    pub threshold_ms: i64,
}

/// Summary statistics for one region.
///
/// The averages are always written as JSON floats, so the zeroed entry for an
/// unknown region reads `0.0` rather than `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionMetrics {
    pub avg_latency: f64,
    pub p95_latency: f64,
    pub avg_uptime: f64,
    pub breaches: usize,
}

/// Region name to metrics, in the order regions were first requested.
/// Duplicate region names collapse to one key.
pub type AnalyticsResponse = IndexMap<String, RegionMetrics>;

/// Result of one analysis pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Analysis {
    pub results: AnalyticsResponse,
    /// Distinct requested regions absent from the dataset.
    pub unknown_regions: usize,
}

/// Computes per-region metrics over a fixed set of telemetry records.
#[derive(Debug, Clone)]
pub struct AnalyticsService {
    groups: RegionGroups<'static>,
}

impl AnalyticsService {
    /// Service over the embedded dataset.
    pub fn new() -> Self {
        Self {
            groups: load_telemetry_by_region(),
        }
    }

    pub fn from_records(records: &'static [TelemetryRecord]) -> Self {
        Self {
            groups: RegionGroups::from_records(records),
        }
    }

    pub fn groups(&self) -> &RegionGroups<'static> {
        &self.groups
    }

    pub fn is_known_region(&self, region: &str) -> bool {
        self.groups.get(region).is_some()
    }

    /// Metrics for every requested region. Fails as a whole if any region fails.
    pub fn analyze(&self, request: &AnalyticsRequest) -> TelemetryResult<Analysis> {
        let mut analysis = Analysis::default();
        for region in &request.regions {
            if analysis.results.contains_key(region) {
                continue;
            }
            let metrics = match self.groups.get(region) {
                Some(records) => group_metrics(region, records, request.threshold_ms)?,
                None => {
                    debug!(region = %region, "Unknown region, returning zeroed metrics");
                    analysis.unknown_regions += 1;
                    RegionMetrics::default()
                }
            };
            analysis.results.insert(region.clone(), metrics);
        }
        Ok(analysis)
    }

    /// Metrics for a single region. Unknown regions yield all-zero metrics.
    pub fn region_metrics(
        &self,
        region: &str,
        threshold_ms: i64,
    ) -> TelemetryResult<RegionMetrics> {
        match self.groups.get(region) {
            Some(records) => group_metrics(region, records, threshold_ms),
            None => Ok(RegionMetrics::default()),
        }
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}

fn group_metrics(
    region: &str,
    records: &[&TelemetryRecord],
    threshold_ms: i64,
) -> TelemetryResult<RegionMetrics> {
    let latencies: Vec<f64> = records.iter().map(|r| r.latency_ms).collect();
    let uptimes: Vec<f64> = records.iter().map(|r| r.uptime_pct).collect();

    Ok(RegionMetrics {
        avg_latency: finite(region, "avg_latency", round2(mean(&latencies)))?,
        p95_latency: finite(region, "p95_latency", round2(percentile_95(&latencies)))?,
        avg_uptime: finite(region, "avg_uptime", round2(mean(&uptimes)))?,
        breaches: count_breaches(&latencies, threshold_ms),
    })
}

fn finite(region: &str, metric: &'static str, value: f64) -> TelemetryResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(TelemetryError::NonFinite {
            region: region.to_string(),
            metric,
        })
    }
}

struct ThresholdVisitor;

impl de::Visitor<'_> for ThresholdVisitor {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer latency threshold")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<i64, E> {
        Ok(value)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<i64, E> {
        i64::try_from(value)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<i64, E> {
        // i64::MAX is not representable as f64; the bound is exclusive
        if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
            Ok(value as i64)
        } else {
            Err(E::invalid_value(de::Unexpected::Float(value), &self))
        }
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<i64, E> {
        value
            .trim()
            .parse()
            .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
    }
}

fn deserialize_threshold<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    deserializer.deserialize_any(ThresholdVisitor)
}

/// Arithmetic mean, 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Nearest-rank 95th percentile: the ascending-sorted value at
/// `min(floor(n * 0.95), n - 1)`. No interpolation. 0 for an empty slice.
pub fn percentile_95(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let index = (sorted.len() as f64 * P95_RANK) as usize;
    sorted[index.min(sorted.len() - 1)]
}

/// Number of samples strictly above `threshold_ms`.
pub fn count_breaches(latencies: &[f64], threshold_ms: i64) -> usize {
    let threshold = threshold_ms as f64;
    latencies.iter().filter(|&&latency| latency > threshold).count()
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
