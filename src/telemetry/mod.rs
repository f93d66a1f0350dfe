use thiserror::Error;

mod dataset;

pub use dataset::TELEMETRY_DATA;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TelemetryError {
    #[error("non-finite {metric} for region '{region}'")]
    NonFinite { region: String, metric: &'static str },
    #[error("invalid telemetry record: {0}")]
    InvalidRecord(String),
}

pub type TelemetryResult<T> = Result<T, TelemetryError>;

/// A single latency/uptime sample for one service in one region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetryRecord {
    pub region: &'static str,
    pub service: &'static str,
    pub latency_ms: f64,
    pub uptime_pct: f64,
    /// Sample date encoded as `YYYYMMDD`.
    pub timestamp: u32,
}

/// Records partitioned by region, keeping the dataset's first-seen region order
/// and the original record order within each region.
#[derive(Debug, Clone, Default)]
pub struct RegionGroups<'a> {
    groups: Vec<(&'a str, Vec<&'a TelemetryRecord>)>,
}

impl<'a> RegionGroups<'a> {
    pub fn from_records(records: &'a [TelemetryRecord]) -> Self {
        let mut groups: Vec<(&'a str, Vec<&'a TelemetryRecord>)> = Vec::new();
        for record in records {
            match groups.iter_mut().find(|(region, _)| *region == record.region) {
                Some((_, group)) => group.push(record),
                None => groups.push((record.region, vec![record])),
            }
        }
        Self { groups }
    }

    /// Records for `region`, or `None` when the region never appears.
    pub fn get(&self, region: &str) -> Option<&[&'a TelemetryRecord]> {
        self.groups
            .iter()
            .find(|(name, _)| *name == region)
            .map(|(_, group)| group.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &[&'a TelemetryRecord])> + '_ {
        self.groups
            .iter()
            .map(|(region, group)| (*region, group.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Groups the embedded dataset by region.
pub fn load_telemetry_by_region() -> RegionGroups<'static> {
    RegionGroups::from_records(TELEMETRY_DATA)
}

/// Checks that every record in `records` is usable for aggregation.
pub fn validate_records(records: &[TelemetryRecord]) -> TelemetryResult<()> {
    for record in records {
        if record.region.is_empty() {
            return Err(TelemetryError::InvalidRecord(format!(
                "empty region for service '{}' at {}",
                record.service, record.timestamp
            )));
        }
        if !record.latency_ms.is_finite() || record.latency_ms < 0.0 {
            return Err(TelemetryError::InvalidRecord(format!(
                "latency {} for region '{}' at {}",
                record.latency_ms, record.region, record.timestamp
            )));
        }
        if !(0.0..=100.0).contains(&record.uptime_pct) {
            return Err(TelemetryError::InvalidRecord(format!(
                "uptime {} for region '{}' at {}",
                record.uptime_pct, record.region, record.timestamp
            )));
        }
    }
    Ok(())
}
