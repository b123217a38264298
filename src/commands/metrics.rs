use crate::models::{NewPerformanceMetric, PerformanceMetric};
use crate::store::{AppState, Order};
use std::sync::Arc;
use tauri::State;

/// Performance metrics for one athlete, newest first
#[tauri::command]
pub async fn get_metrics(
  state: State<'_, Arc<AppState>>,
  athlete_id: String,
) -> Result<Vec<PerformanceMetric>, String> {
  state
    .store
    .fetch_metrics(&athlete_id, Order::Descending)
    .await
    .map_err(|e| format!("Failed to fetch metrics: {}", e))
}

#[tauri::command]
pub async fn create_metric(
  state: State<'_, Arc<AppState>>,
  metric: NewPerformanceMetric,
) -> Result<(), String> {
  if metric.metric_type.trim().is_empty() {
    return Err("Metric type is required".to_string());
  }

  state
    .store
    .insert_metric(&metric)
    .await
    .map_err(|e| format!("Failed to create metric: {}", e))
}

#[tauri::command]
pub async fn delete_metric(state: State<'_, Arc<AppState>>, id: String) -> Result<(), String> {
  state
    .store
    .delete_metric(&id)
    .await
    .map_err(|e| format!("Failed to delete metric: {}", e))
}
