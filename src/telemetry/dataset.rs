//! Telemetry samples compiled into the service. Loaded once, never mutated.

use super::TelemetryRecord;

const fn record(
    region: &'static str,
    service: &'static str,
    latency_ms: f64,
    uptime_pct: f64,
    timestamp: u32,
) -> TelemetryRecord {
    TelemetryRecord {
        region,
        service,
        latency_ms,
        uptime_pct,
        timestamp,
    }
}

pub static TELEMETRY_DATA: &[TelemetryRecord] = &[
    record("apac", "checkout", 205.02, 97.377, 20250301),
    record("apac", "checkout", 131.63, 98.317, 20250302),
    record("apac", "recommendations", 177.01, 99.422, 20250303),
    record("apac", "support", 158.44, 98.581, 20250304),
    record("apac", "payments", 185.71, 99.468, 20250305),
    record("apac", "support", 137.59, 99.394, 20250306),
    record("apac", "payments", 188.74, 97.25, 20250307),
    record("apac", "recommendations", 197.24, 98.278, 20250308),
    record("apac", "support", 125.35, 99.073, 20250309),
    record("apac", "checkout", 149.41, 98.258, 20250310),
    record("apac", "checkout", 104.36, 99.457, 20250311),
    record("apac", "payments", 140.83, 97.856, 20250312),
    record("emea", "recommendations", 128.92, 97.3, 20250301),
    record("emea", "payments", 214.41, 97.65, 20250302),
    record("emea", "checkout", 231.4, 97.821, 20250303),
    record("emea", "recommendations", 119.73, 98.554, 20250304),
    record("emea", "recommendations", 198.62, 98.264, 20250305),
    record("emea", "payments", 135.1, 99.113, 20250306),
    record("emea", "support", 194.91, 98.125, 20250307),
    record("emea", "recommendations", 154.07, 97.936, 20250308),
    record("emea", "analytics", 155.64, 99.066, 20250309),
    record("emea", "analytics", 123.86, 98.005, 20250310),
    record("emea", "checkout", 195.99, 98.795, 20250311),
    record("emea", "support", 198.11, 97.57, 20250312),
    record("amer", "checkout", 223.51, 98.344, 20250301),
    record("amer", "catalog", 208.26, 99.133, 20250302),
    record("amer", "support", 190.5, 99.097, 20250303),
    record("amer", "recommendations", 139.44, 98.133, 20250304),
    record("amer", "recommendations", 182.64, 99.217, 20250305),
    record("amer", "recommendations", 159.3, 97.626, 20250306),
    record("amer", "catalog", 124.16, 99.1, 20250307),
    record("amer", "analytics", 135.39, 98.027, 20250308),
    record("amer", "checkout", 226.37, 98.302, 20250309),
    record("amer", "payments", 222.16, 97.372, 20250310),
    record("amer", "catalog", 123.08, 97.184, 20250311),
    record("amer", "catalog", 159.77, 97.152, 20250312),
];
