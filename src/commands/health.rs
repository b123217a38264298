use crate::models::{HealthStat, NewHealthStat};
use crate::store::{AppState, Order};
use std::sync::Arc;
use tauri::State;

/// Health stats for one athlete, newest first
#[tauri::command]
pub async fn get_health_stats(
  state: State<'_, Arc<AppState>>,
  athlete_id: String,
) -> Result<Vec<HealthStat>, String> {
  state
    .store
    .fetch_health_stats(&athlete_id, Order::Descending)
    .await
    .map_err(|e| format!("Failed to fetch health stats: {}", e))
}

#[tauri::command]
pub async fn create_health_stat(
  state: State<'_, Arc<AppState>>,
  stat: NewHealthStat,
) -> Result<(), String> {
  state
    .store
    .insert_health_stat(&stat)
    .await
    .map_err(|e| format!("Failed to create health stat: {}", e))
}

#[tauri::command]
pub async fn delete_health_stat(
  state: State<'_, Arc<AppState>>,
  id: String,
) -> Result<(), String> {
  state
    .store
    .delete_health_stat(&id)
    .await
    .map_err(|e| format!("Failed to delete health stat: {}", e))
}
