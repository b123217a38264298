//! Test utilities and helpers
//!
//! Mock data factories plus a store client wired to a mockito server.

use chrono::{Duration, Utc};

use crate::models::{HealthStat, HydrationLevel, Intensity, PerformanceMetric, Workout};
use crate::store::{StoreClient, StoreConfig};

/// ---------------------------------------------------------------------------
/// Store Test Utilities
/// ---------------------------------------------------------------------------

/// Build a store client pointed at a mockito server
pub fn test_store_client(server: &mockito::ServerGuard) -> StoreClient {
  StoreClient::new(StoreConfig {
    base_url: server.url(),
    api_key: "test-key".to_string(),
  })
  .expect("Failed to build test store client")
}

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

/// Create a mock workout recorded `days_ago` days before today
pub fn mock_workout(duration_minutes: i64, days_ago: i64) -> Workout {
  Workout {
    id: format!("workout-{}", days_ago),
    athlete_id: "athlete-1".to_string(),
    workout_type: "Running".to_string(),
    duration_minutes,
    intensity: Intensity::Moderate,
    workout_date: Utc::now().date_naive() - Duration::days(days_ago),
    notes: String::new(),
    created_at: None,
  }
}

/// Create a mock performance metric recorded `days_ago` days before today
pub fn mock_metric(metric_type: &str, value: f64, days_ago: i64) -> PerformanceMetric {
  PerformanceMetric {
    id: format!("metric-{}-{}", metric_type, days_ago),
    athlete_id: "athlete-1".to_string(),
    metric_type: metric_type.to_string(),
    value,
    unit: "units".to_string(),
    recorded_date: Utc::now().date_naive() - Duration::days(days_ago),
    notes: String::new(),
    created_at: None,
  }
}

/// Create a mock health stat recorded `days_ago` days before today
pub fn mock_health_stat(days_ago: i64) -> HealthStat {
  HealthStat {
    id: format!("stat-{}", days_ago),
    athlete_id: "athlete-1".to_string(),
    heart_rate: 62,
    blood_pressure_systolic: 118,
    blood_pressure_diastolic: 76,
    sleep_hours: 7.5,
    hydration_level: HydrationLevel::Good,
    stress_level: 4,
    recorded_date: Utc::now().date_naive() - Duration::days(days_ago),
    notes: String::new(),
    created_at: None,
  }
}

/// ---------------------------------------------------------------------------
/// Test Macros
/// ---------------------------------------------------------------------------

/// Assert two floats are approximately equal within a tolerance
#[macro_export]
macro_rules! assert_approx_eq {
  ($left:expr, $right:expr, $tolerance:expr) => {
    let diff = ($left - $right).abs();
    assert!(
      diff < $tolerance,
      "Values not approximately equal: {} vs {} (diff: {}, tolerance: {})",
      $left,
      $right,
      diff,
      $tolerance
    );
  };
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_mock_factories_create_valid_data() {
    let workout = mock_workout(45, 2);
    assert_eq!(workout.duration_minutes, 45);
    assert_eq!(workout.intensity, Intensity::Moderate);
    assert!(workout.workout_date < Utc::now().date_naive());

    let metric = mock_metric("speed", 12.5, 1);
    assert_eq!(metric.metric_type, "speed");
    assert_eq!(metric.value, 12.5);

    let stat = mock_health_stat(0);
    assert_eq!(stat.hydration_level, HydrationLevel::Good);
    assert_eq!(stat.recorded_date, Utc::now().date_naive());
  }
}
