//! Progress analytics over fetched athlete data
//!
//! Pure transforms over collections already returned by the backend. Each
//! function works on an immutable snapshot, performs no I/O, and produces
//! the same output for the same input.

use chrono::{Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{PerformanceMetric, Workout};

/// Values per comparison window in the trend calculation
const TREND_WINDOW: usize = 3;

/// Trailing window for "recent" workout counts, in days
const RECENT_WINDOW_DAYS: i64 = 30;

/// ---------------------------------------------------------------------------
/// Trend Analyzer
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
  Up,
  Down,
  Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricTrend {
  pub direction: TrendDirection,
  pub change_percent: u32,
}

impl MetricTrend {
  pub fn neutral() -> Self {
    Self {
      direction: TrendDirection::Neutral,
      change_percent: 0,
    }
  }

  /// Two-window moving-average comparison: the mean of the last three
  /// values against the mean of the three values before them.
  ///
  /// Requires chronologically ascending input. Returns neutral when there
  /// is no older window to compare against, or when the older mean is zero
  /// (a flat-zero baseline has no defined percent change).
  pub fn compute(values: &[f64]) -> Self {
    let n = values.len();
    if n <= TREND_WINDOW {
      return Self::neutral();
    }

    let recent = &values[n - TREND_WINDOW..];
    let older = &values[n.saturating_sub(TREND_WINDOW * 2)..n - TREND_WINDOW];

    let recent_mean = mean(recent);
    let older_mean = mean(older);
    if older_mean == 0.0 {
      return Self::neutral();
    }

    let change = (recent_mean - older_mean) / older_mean * 100.0;
    let direction = if change > 0.0 {
      TrendDirection::Up
    } else if change < 0.0 {
      TrendDirection::Down
    } else {
      TrendDirection::Neutral
    };

    Self {
      direction,
      change_percent: change.abs().round() as u32,
    }
  }
}

fn mean(values: &[f64]) -> f64 {
  values.iter().sum::<f64>() / values.len() as f64
}

/// Trend for one metric type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryTrend {
  pub metric_type: String,
  pub trend: MetricTrend,
}

/// Trend per metric type, in first-appearance order.
/// Expects metrics in ascending date order.
pub fn category_trends(metrics: &[PerformanceMetric]) -> Vec<CategoryTrend> {
  let mut labels: Vec<&str> = Vec::new();
  for metric in metrics {
    if !labels.contains(&metric.metric_type.as_str()) {
      labels.push(&metric.metric_type);
    }
  }

  labels
    .into_iter()
    .map(|label| {
      let values: Vec<f64> = metrics
        .iter()
        .filter(|m| m.metric_type == label)
        .map(|m| m.value)
        .collect();

      CategoryTrend {
        metric_type: label.to_string(),
        trend: MetricTrend::compute(&values),
      }
    })
    .collect()
}

/// ---------------------------------------------------------------------------
/// Chart Normalizer
/// ---------------------------------------------------------------------------

/// Map values onto proportional bar heights in [0, 100].
/// A flat sequence (max == min) yields height 0 for every bar.
pub fn normalized_heights(values: &[f64]) -> Vec<f64> {
  if values.is_empty() {
    return Vec::new();
  }

  let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
  let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
  let range = if max > min { max - min } else { 1.0 };

  values.iter().map(|v| (v - min) / range * 100.0).collect()
}

/// One bar of the metric chart, ready for rendering
#[derive(Debug, Clone, Serialize)]
pub struct ChartBar {
  pub recorded_date: NaiveDate,
  pub value: f64,
  pub unit: String,
  pub height: f64,
  pub color: &'static str,
}

/// Chart series for a metric collection, heights normalized across the
/// whole input. Expects metrics in ascending date order.
pub fn chart_bars(metrics: &[PerformanceMetric]) -> Vec<ChartBar> {
  let values: Vec<f64> = metrics.iter().map(|m| m.value).collect();
  let heights = normalized_heights(&values);

  metrics
    .iter()
    .zip(heights)
    .map(|(metric, height)| ChartBar {
      recorded_date: metric.recorded_date,
      value: metric.value,
      unit: metric.unit.clone(),
      height,
      color: metric.category().color(),
    })
    .collect()
}

/// ---------------------------------------------------------------------------
/// Workout Aggregates
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutStats {
  pub total_workouts: i64,
  pub total_minutes: i64,
  pub avg_duration: i64,
  pub recent_count: i64,
}

impl WorkoutStats {
  pub fn compute(workouts: &[Workout]) -> Self {
    Self::compute_at(workouts, Utc::now().date_naive())
  }

  /// Window arithmetic against an explicit "today" so tests stay
  /// deterministic across date boundaries.
  fn compute_at(workouts: &[Workout], today: NaiveDate) -> Self {
    let total_workouts = workouts.len() as i64;
    let total_minutes: i64 = workouts.iter().map(|w| w.duration_minutes).sum();
    let avg_duration = if total_workouts > 0 {
      (total_minutes as f64 / total_workouts as f64).round() as i64
    } else {
      0
    };

    let window_start = today - Duration::days(RECENT_WINDOW_DAYS);
    let recent_count = workouts
      .iter()
      .filter(|w| w.workout_date >= window_start && w.workout_date <= today)
      .count() as i64;

    Self {
      total_workouts,
      total_minutes,
      avg_duration,
      recent_count,
    }
  }
}

/// ---------------------------------------------------------------------------
/// Progress Overview
/// ---------------------------------------------------------------------------

/// Everything the progress view renders: the stat cards plus one trend per
/// metric type.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressOverview {
  pub stats: WorkoutStats,
  pub trends: Vec<CategoryTrend>,
  pub metrics_tracked: usize,
  pub metric_type_count: usize,
}

impl ProgressOverview {
  /// Expects both collections in ascending date order.
  pub fn build(metrics: &[PerformanceMetric], workouts: &[Workout]) -> Self {
    let trends = category_trends(metrics);

    Self {
      stats: WorkoutStats::compute(workouts),
      metrics_tracked: metrics.len(),
      metric_type_count: trends.len(),
      trends,
    }
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
