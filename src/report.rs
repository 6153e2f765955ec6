//! Benchmark report data model

use crate::types::PerformanceLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Results of one benchmark run over the sample file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadReport {
    /// Path of the file that was loaded
    pub file_path: PathBuf,

    /// Number of load invocations performed
    pub num_times: u32,

    /// Combined wall-clock duration of all load invocations
    pub total_elapsed: Duration,

    /// Bytes read from disk by a single load invocation
    pub bytes_read: u64,

    /// Timestamp when the measured region started
    pub started_at: DateTime<Utc>,
}

impl LoadReport {
    /// Create a new report for a completed run
    pub fn new(
        file_path: PathBuf,
        num_times: u32,
        total_elapsed: Duration,
        bytes_read: u64,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            file_path,
            num_times,
            total_elapsed,
            bytes_read,
            started_at,
        }
    }

    /// Total elapsed time in seconds
    pub fn total_secs(&self) -> f64 {
        self.total_elapsed.as_secs_f64()
    }

    /// Arithmetic mean per invocation, in seconds
    pub fn average_secs(&self) -> f64 {
        self.total_secs() / self.num_times as f64
    }

    /// Arithmetic mean per invocation as a Duration
    pub fn average(&self) -> Duration {
        self.total_elapsed / self.num_times.max(1)
    }

    /// Total elapsed time in milliseconds
    pub fn total_ms(&self) -> f64 {
        self.total_secs() * 1000.0
    }

    /// Average time per invocation in milliseconds
    pub fn average_ms(&self) -> f64 {
        self.average_secs() * 1000.0
    }

    /// Disk throughput over the whole run in megabytes per second
    pub fn throughput_mb_per_sec(&self) -> f64 {
        let total_secs = self.total_secs();
        if total_secs > 0.0 {
            let total_bytes = self.bytes_read as f64 * self.num_times as f64;
            total_bytes / 1_000_000.0 / total_secs
        } else {
            0.0
        }
    }

    /// Classify the average per-load duration
    pub fn performance_level(&self) -> PerformanceLevel {
        PerformanceLevel::from_duration(self.average())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_report(total: Duration, num_times: u32) -> LoadReport {
        LoadReport::new(
            PathBuf::from("/data/example-files/tmp/xdf_001.xdf"),
            num_times,
            total,
            4096,
            Utc::now(),
        )
    }

    #[test]
    fn test_average_is_total_over_count() {
        let report = sample_report(Duration::from_millis(500), 10);
        assert_eq!(report.total_secs(), 0.5);
        assert_eq!(report.average_secs(), 0.05);
        assert_eq!(report.average(), Duration::from_millis(50));
    }

    #[test]
    fn test_millisecond_accessors() {
        let report = sample_report(Duration::from_millis(250), 10);
        assert_eq!(report.total_ms(), 250.0);
        assert_eq!(report.average_ms(), 25.0);
    }

    #[test]
    fn test_throughput() {
        // 4096 bytes * 10 loads over 0.5s = 81920 bytes/s
        let report = sample_report(Duration::from_millis(500), 10);
        let expected = 4096.0 * 10.0 / 1_000_000.0 / 0.5;
        assert!((report.throughput_mb_per_sec() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_throughput_zero_elapsed() {
        let report = sample_report(Duration::ZERO, 10);
        assert_eq!(report.throughput_mb_per_sec(), 0.0);
    }

    #[test]
    fn test_performance_level_from_average() {
        let fast = sample_report(Duration::from_millis(500), 10);
        assert_eq!(fast.performance_level(), PerformanceLevel::Good);

        let slow = sample_report(Duration::from_secs(30), 10);
        assert_eq!(slow.performance_level(), PerformanceLevel::Poor);
    }

    #[test]
    fn test_serde_round_trip() {
        let report = sample_report(Duration::from_millis(123), 10);
        let json = serde_json::to_string(&report).unwrap();
        let restored: LoadReport = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.file_path, report.file_path);
        assert_eq!(restored.num_times, report.num_times);
        assert_eq!(restored.total_elapsed, report.total_elapsed);
        assert_eq!(restored.bytes_read, report.bytes_read);
    }

    proptest! {
        #[test]
        fn prop_average_equals_total_over_count(
            total_nanos in 0u64..u64::from(u32::MAX),
            num_times in 1u32..1_000,
        ) {
            let report = sample_report(Duration::from_nanos(total_nanos), num_times);
            let expected = report.total_secs() / num_times as f64;
            prop_assert_eq!(report.average_secs().to_bits(), expected.to_bits());
        }
    }
}
