//! Progress view commands: concurrent reads plus the analytics transforms
//!
//! Both commands return `Ok(None)` when a newer fetch superseded them while
//! their reads were in flight (rapid athlete switching); the caller discards
//! such a response instead of overwriting newer state.

use crate::analytics::{chart_bars, ChartBar, ProgressOverview};
use crate::store::{AppState, Order};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tauri::State;

fn claim_epoch(state: &AppState) -> u64 {
  state.progress_epoch.fetch_add(1, Ordering::SeqCst) + 1
}

fn epoch_is_current(state: &AppState, epoch: u64) -> bool {
  state.progress_epoch.load(Ordering::SeqCst) == epoch
}

#[tauri::command]
pub async fn get_progress_overview(
  state: State<'_, Arc<AppState>>,
  athlete_id: String,
) -> Result<Option<ProgressOverview>, String> {
  let epoch = claim_epoch(&state);

  // Disjoint collections with no ordering dependency: read both at once.
  // A failed read fails the whole overview; there is no partial result.
  let (metrics, workouts) = tokio::try_join!(
    state.store.fetch_metrics(&athlete_id, Order::Ascending),
    state.store.fetch_workouts(&athlete_id, Order::Ascending),
  )
  .map_err(|e| format!("Failed to fetch progress data: {}", e))?;

  if !epoch_is_current(&state, epoch) {
    return Ok(None);
  }

  Ok(Some(ProgressOverview::build(&metrics, &workouts)))
}

#[tauri::command]
pub async fn get_metric_chart(
  state: State<'_, Arc<AppState>>,
  athlete_id: String,
  metric_type: Option<String>,
) -> Result<Option<Vec<ChartBar>>, String> {
  let epoch = claim_epoch(&state);

  let mut metrics = state
    .store
    .fetch_metrics(&athlete_id, Order::Ascending)
    .await
    .map_err(|e| format!("Failed to fetch metrics: {}", e))?;

  if let Some(metric_type) = metric_type {
    metrics.retain(|m| m.metric_type == metric_type);
  }

  if !epoch_is_current(&state, epoch) {
    return Ok(None);
  }

  Ok(Some(chart_bars(&metrics)))
}
