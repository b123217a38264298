use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
  pub id: String,
  pub athlete_id: String,
  pub workout_type: String,
  pub duration_minutes: i64,
  pub intensity: Intensity,
  pub workout_date: NaiveDate,
  pub notes: String,
  pub created_at: Option<DateTime<Utc>>,
}

/// For inserting new workouts (without id, created_at)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWorkout {
  pub athlete_id: String,
  pub workout_type: String,
  pub duration_minutes: i64,
  pub intensity: Intensity,
  pub workout_date: NaiveDate,
  pub notes: String,
}

/// Workout intensity. The backend stores an open string; anything outside
/// the known set maps to `Unknown` and keeps the default display style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Intensity {
  Low,
  Moderate,
  High,
  Unknown,
}

impl Intensity {
  pub fn parse(value: &str) -> Self {
    match value {
      "low" => Self::Low,
      "moderate" => Self::Moderate,
      "high" => Self::High,
      _ => Self::Unknown,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Low => "low",
      Self::Moderate => "moderate",
      Self::High => "high",
      Self::Unknown => "unknown",
    }
  }

  /// Display color for the intensity badge
  #[allow(dead_code)]
  pub fn color(&self) -> &'static str {
    match self {
      Self::Low => "green",
      Self::Moderate => "yellow",
      Self::High => "red",
      Self::Unknown => "slate",
    }
  }
}

impl From<String> for Intensity {
  fn from(value: String) -> Self {
    Self::parse(&value)
  }
}

impl std::fmt::Display for Intensity {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}
