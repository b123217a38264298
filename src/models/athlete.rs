use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Athlete {
  pub id: String,
  pub name: String,
  pub email: Option<String>,
  pub sport: String,
  pub team: String,
  pub date_of_birth: Option<NaiveDate>,
  pub height_cm: f64,
  pub weight_kg: f64,
  pub created_at: Option<DateTime<Utc>>,
  pub updated_at: Option<DateTime<Utc>>,
}

/// For inserting new athletes (without id, created_at, updated_at)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAthlete {
  pub name: String,
  pub email: Option<String>,
  pub sport: String,
  pub team: String,
  pub date_of_birth: Option<NaiveDate>,
  pub height_cm: f64,
  pub weight_kg: f64,
}
