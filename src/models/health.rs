use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStat {
  pub id: String,
  pub athlete_id: String,
  pub heart_rate: i64,
  pub blood_pressure_systolic: i64,
  pub blood_pressure_diastolic: i64,
  pub sleep_hours: f64,
  pub hydration_level: HydrationLevel,
  pub stress_level: i64,
  pub recorded_date: NaiveDate,
  pub notes: String,
  pub created_at: Option<DateTime<Utc>>,
}

/// For inserting new health stats (without id, created_at)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewHealthStat {
  pub athlete_id: String,
  pub heart_rate: i64,
  pub blood_pressure_systolic: i64,
  pub blood_pressure_diastolic: i64,
  pub sleep_hours: f64,
  pub hydration_level: HydrationLevel,
  pub stress_level: i64,
  pub recorded_date: NaiveDate,
  pub notes: String,
}

/// Hydration rating. Open string on the wire; unrecognized values map to
/// `Unknown` and keep the default display style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum HydrationLevel {
  Poor,
  Fair,
  Good,
  Excellent,
  Unknown,
}

impl HydrationLevel {
  pub fn parse(value: &str) -> Self {
    match value {
      "poor" => Self::Poor,
      "fair" => Self::Fair,
      "good" => Self::Good,
      "excellent" => Self::Excellent,
      _ => Self::Unknown,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Poor => "poor",
      Self::Fair => "fair",
      Self::Good => "good",
      Self::Excellent => "excellent",
      Self::Unknown => "unknown",
    }
  }

  /// Display color for the hydration badge
  #[allow(dead_code)]
  pub fn color(&self) -> &'static str {
    match self {
      Self::Poor => "red",
      Self::Fair => "yellow",
      Self::Good => "green",
      Self::Excellent => "blue",
      Self::Unknown => "slate",
    }
  }
}

impl From<String> for HydrationLevel {
  fn from(value: String) -> Self {
    Self::parse(&value)
  }
}

impl std::fmt::Display for HydrationLevel {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Display color band for a 1-10 stress level
#[allow(dead_code)]
pub fn stress_color(level: i64) -> &'static str {
  if level <= 3 {
    "green"
  } else if level <= 6 {
    "yellow"
  } else {
    "red"
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_hydration_parse_and_fallback() {
    assert_eq!(HydrationLevel::parse("poor"), HydrationLevel::Poor);
    assert_eq!(HydrationLevel::parse("excellent"), HydrationLevel::Excellent);
    assert_eq!(HydrationLevel::parse("parched"), HydrationLevel::Unknown);
    assert_eq!(HydrationLevel::parse("parched").color(), "slate");
  }

  #[test]
  fn test_stress_color_bands() {
    assert_eq!(stress_color(1), "green");
    assert_eq!(stress_color(3), "green");
    assert_eq!(stress_color(4), "yellow");
    assert_eq!(stress_color(6), "yellow");
    assert_eq!(stress_color(7), "red");
    assert_eq!(stress_color(10), "red");
  }
}
