//! Type definitions and aliases

use std::time::Duration;

// Re-export commonly used types
pub use crate::error::{AppError, Result};

/// Performance classification based on the average per-load duration
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PerformanceLevel {
    /// Good performance (< 100 ms per load)
    Good,
    /// Moderate performance (100 ms - 1 second per load)
    Moderate,
    /// Poor performance (> 1 second per load)
    Poor,
}

impl PerformanceLevel {
    /// Classify performance based on the average duration of one load call
    pub fn from_duration(duration: Duration) -> Self {
        let secs = duration.as_secs_f64();
        if secs < 0.1 {
            Self::Good
        } else if secs < 1.0 {
            Self::Moderate
        } else {
            Self::Poor
        }
    }

    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Moderate => "moderate",
            Self::Poor => "poor",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_performance_classification() {
        assert_eq!(
            PerformanceLevel::from_duration(Duration::from_millis(50)),
            PerformanceLevel::Good
        );
        assert_eq!(
            PerformanceLevel::from_duration(Duration::from_millis(500)),
            PerformanceLevel::Moderate
        );
        assert_eq!(
            PerformanceLevel::from_duration(Duration::from_secs(2)),
            PerformanceLevel::Poor
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(PerformanceLevel::Good.label(), "good");
        assert_eq!(PerformanceLevel::Moderate.label(), "moderate");
        assert_eq!(PerformanceLevel::Poor.label(), "poor");
    }
}
