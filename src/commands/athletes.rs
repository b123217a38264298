use crate::models::{Athlete, NewAthlete};
use crate::store::AppState;
use std::sync::Arc;
use tauri::State;

/// All athletes, ordered by name
#[tauri::command]
pub async fn get_athletes(state: State<'_, Arc<AppState>>) -> Result<Vec<Athlete>, String> {
  state
    .store
    .fetch_athletes()
    .await
    .map_err(|e| format!("Failed to fetch athletes: {}", e))
}

#[tauri::command]
pub async fn create_athlete(
  state: State<'_, Arc<AppState>>,
  athlete: NewAthlete,
) -> Result<(), String> {
  if athlete.name.trim().is_empty() {
    return Err("Athlete name is required".to_string());
  }

  state
    .store
    .insert_athlete(&athlete)
    .await
    .map_err(|e| format!("Failed to create athlete: {}", e))
}
