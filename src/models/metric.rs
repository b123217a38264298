use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single performance reading for one athlete. `metric_type` is an open
/// string on the wire; use [`PerformanceMetric::category`] for typed access.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceMetric {
  pub id: String,
  pub athlete_id: String,
  pub metric_type: String,
  pub value: f64,
  pub unit: String,
  pub recorded_date: NaiveDate,
  pub notes: String,
  pub created_at: Option<DateTime<Utc>>,
}

impl PerformanceMetric {
  pub fn category(&self) -> MetricCategory {
    MetricCategory::parse(&self.metric_type)
  }
}

/// For inserting new metrics (without id, created_at)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPerformanceMetric {
  pub athlete_id: String,
  pub metric_type: String,
  pub value: f64,
  pub unit: String,
  pub recorded_date: NaiveDate,
  pub notes: String,
}

/// Known metric categories, with `Other` as the fallback for labels this
/// client does not recognize (those keep the default display style).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricCategory {
  Speed,
  Strength,
  Endurance,
  Agility,
  Other,
}

impl MetricCategory {
  pub fn parse(label: &str) -> Self {
    match label {
      "speed" => Self::Speed,
      "strength" => Self::Strength,
      "endurance" => Self::Endurance,
      "agility" => Self::Agility,
      _ => Self::Other,
    }
  }

  /// Display color for chart bars and category badges
  pub fn color(&self) -> &'static str {
    match self {
      Self::Speed => "blue",
      Self::Strength => "green",
      Self::Endurance => "orange",
      Self::Agility => "cyan",
      Self::Other => "slate",
    }
  }
}
