//! Client for the hosted backend (Supabase/PostgREST)
//!
//! Every operation is a direct call against one of the four tables. The app
//! keeps no local copy: after a mutation, callers re-fetch the collection.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::env;
use std::sync::atomic::AtomicU64;
use url::Url;

use crate::models::{
  Athlete, HealthStat, NewAthlete, NewHealthStat, NewPerformanceMetric, NewWorkout,
  PerformanceMetric, Workout,
};

/// ---------------------------------------------------------------------------
/// Configuration
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct StoreConfig {
  pub base_url: String,
  pub api_key: String,
}

impl StoreConfig {
  pub fn from_env() -> Result<Self, StoreError> {
    Ok(Self {
      base_url: env::var("SUPABASE_URL")
        .map_err(|_| StoreError::MissingConfig("SUPABASE_URL".into()))?,
      api_key: env::var("SUPABASE_ANON_KEY")
        .map_err(|_| StoreError::MissingConfig("SUPABASE_ANON_KEY".into()))?,
    })
  }
}

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
  #[error("Missing configuration: {0}")]
  MissingConfig(String),

  #[error("Invalid backend URL: {0}")]
  InvalidUrl(String),

  #[error("HTTP request failed: {0}")]
  Request(#[from] reqwest::Error),

  #[error("Backend error: {0}")]
  Backend(String),
}

/// ---------------------------------------------------------------------------
/// Query Direction
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
  Ascending,
  Descending,
}

impl Order {
  fn suffix(self) -> &'static str {
    match self {
      Self::Ascending => "asc",
      Self::Descending => "desc",
    }
  }
}

/// ---------------------------------------------------------------------------
/// Store Client
/// ---------------------------------------------------------------------------

pub struct StoreClient {
  http: Client,
  base_url: Url,
  api_key: String,
}

impl StoreClient {
  pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
    let base_url =
      Url::parse(&config.base_url).map_err(|e| StoreError::InvalidUrl(e.to_string()))?;

    Ok(Self {
      http: Client::new(),
      base_url,
      api_key: config.api_key,
    })
  }

  fn table_url(&self, table: &str) -> Result<Url, StoreError> {
    self
      .base_url
      .join(&format!("rest/v1/{}", table))
      .map_err(|e| StoreError::InvalidUrl(e.to_string()))
  }

  /// Fetch rows from one table. Rows that fail to parse (e.g. a malformed
  /// date value) are skipped and logged rather than failing the whole read.
  async fn select_rows<T: DeserializeOwned>(
    &self,
    table: &str,
    filter: Option<(&str, &str)>,
    order: (&str, Order),
  ) -> Result<Vec<T>, StoreError> {
    let mut url = self.table_url(table)?;
    {
      let mut pairs = url.query_pairs_mut();
      pairs.append_pair("select", "*");
      if let Some((column, value)) = filter {
        pairs.append_pair(column, &format!("eq.{}", value));
      }
      let (column, direction) = order;
      pairs.append_pair("order", &format!("{}.{}", column, direction.suffix()));
    }

    let response = self
      .http
      .get(url)
      .header("apikey", &self.api_key)
      .header("Authorization", format!("Bearer {}", self.api_key))
      .send()
      .await?;

    if !response.status().is_success() {
      let status = response.status();
      let body = response.text().await.unwrap_or_default();
      return Err(StoreError::Backend(format!(
        "Failed to fetch {}: {} {}",
        table, status, body
      )));
    }

    let rows: Vec<serde_json::Value> = response.json().await?;
    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
      match serde_json::from_value::<T>(row) {
        Ok(record) => records.push(record),
        Err(e) => eprintln!("Skipping malformed {} row: {}", table, e),
      }
    }

    Ok(records)
  }

  async fn insert_row<T: Serialize>(&self, table: &str, row: &T) -> Result<(), StoreError> {
    let url = self.table_url(table)?;

    let response = self
      .http
      .post(url)
      .header("apikey", &self.api_key)
      .header("Authorization", format!("Bearer {}", self.api_key))
      .header("Prefer", "return=minimal")
      .json(row)
      .send()
      .await?;

    if !response.status().is_success() {
      let status = response.status();
      let body = response.text().await.unwrap_or_default();
      return Err(StoreError::Backend(format!(
        "Failed to insert into {}: {} {}",
        table, status, body
      )));
    }

    Ok(())
  }

  async fn delete_row(&self, table: &str, id: &str) -> Result<(), StoreError> {
    let mut url = self.table_url(table)?;
    url
      .query_pairs_mut()
      .append_pair("id", &format!("eq.{}", id));

    let response = self
      .http
      .delete(url)
      .header("apikey", &self.api_key)
      .header("Authorization", format!("Bearer {}", self.api_key))
      .send()
      .await?;

    if !response.status().is_success() {
      let status = response.status();
      let body = response.text().await.unwrap_or_default();
      return Err(StoreError::Backend(format!(
        "Failed to delete from {}: {} {}",
        table, status, body
      )));
    }

    Ok(())
  }

  /// -------------------------------------------------------------------------
  /// Athletes
  /// -------------------------------------------------------------------------

  pub async fn fetch_athletes(&self) -> Result<Vec<Athlete>, StoreError> {
    self
      .select_rows("athletes", None, ("name", Order::Ascending))
      .await
  }

  pub async fn insert_athlete(&self, athlete: &NewAthlete) -> Result<(), StoreError> {
    self.insert_row("athletes", athlete).await
  }

  /// -------------------------------------------------------------------------
  /// Workouts
  /// -------------------------------------------------------------------------

  pub async fn fetch_workouts(
    &self,
    athlete_id: &str,
    order: Order,
  ) -> Result<Vec<Workout>, StoreError> {
    self
      .select_rows(
        "workouts",
        Some(("athlete_id", athlete_id)),
        ("workout_date", order),
      )
      .await
  }

  pub async fn insert_workout(&self, workout: &NewWorkout) -> Result<(), StoreError> {
    self.insert_row("workouts", workout).await
  }

  pub async fn delete_workout(&self, id: &str) -> Result<(), StoreError> {
    self.delete_row("workouts", id).await
  }

  /// -------------------------------------------------------------------------
  /// Performance Metrics
  /// -------------------------------------------------------------------------

  pub async fn fetch_metrics(
    &self,
    athlete_id: &str,
    order: Order,
  ) -> Result<Vec<PerformanceMetric>, StoreError> {
    self
      .select_rows(
        "performance_metrics",
        Some(("athlete_id", athlete_id)),
        ("recorded_date", order),
      )
      .await
  }

  pub async fn insert_metric(&self, metric: &NewPerformanceMetric) -> Result<(), StoreError> {
    self.insert_row("performance_metrics", metric).await
  }

  pub async fn delete_metric(&self, id: &str) -> Result<(), StoreError> {
    self.delete_row("performance_metrics", id).await
  }

  /// -------------------------------------------------------------------------
  /// Health Stats
  /// -------------------------------------------------------------------------

  pub async fn fetch_health_stats(
    &self,
    athlete_id: &str,
    order: Order,
  ) -> Result<Vec<HealthStat>, StoreError> {
    self
      .select_rows(
        "health_stats",
        Some(("athlete_id", athlete_id)),
        ("recorded_date", order),
      )
      .await
  }

  pub async fn insert_health_stat(&self, stat: &NewHealthStat) -> Result<(), StoreError> {
    self.insert_row("health_stats", stat).await
  }

  pub async fn delete_health_stat(&self, id: &str) -> Result<(), StoreError> {
    self.delete_row("health_stats", id).await
  }
}

/// ---------------------------------------------------------------------------
/// Application State
/// ---------------------------------------------------------------------------

/// Application state holding the backend client.
///
/// `progress_epoch` is bumped by every progress/chart fetch; a fetch whose
/// epoch is stale by completion time returns nothing so a slow response for
/// a previously selected athlete can never overwrite newer state.
pub struct AppState {
  pub store: StoreClient,
  pub progress_epoch: AtomicU64,
}

impl AppState {
  pub fn new(store: StoreClient) -> Self {
    Self {
      store,
      progress_epoch: AtomicU64::new(0),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
