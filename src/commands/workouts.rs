use crate::models::{NewWorkout, Workout};
use crate::store::{AppState, Order};
use std::sync::Arc;
use tauri::State;

/// Workouts for one athlete, newest first
#[tauri::command]
pub async fn get_workouts(
  state: State<'_, Arc<AppState>>,
  athlete_id: String,
) -> Result<Vec<Workout>, String> {
  state
    .store
    .fetch_workouts(&athlete_id, Order::Descending)
    .await
    .map_err(|e| format!("Failed to fetch workouts: {}", e))
}

#[tauri::command]
pub async fn create_workout(
  state: State<'_, Arc<AppState>>,
  workout: NewWorkout,
) -> Result<(), String> {
  if workout.workout_type.trim().is_empty() {
    return Err("Workout type is required".to_string());
  }
  if workout.duration_minutes < 0 {
    return Err("Duration must be non-negative".to_string());
  }

  state
    .store
    .insert_workout(&workout)
    .await
    .map_err(|e| format!("Failed to create workout: {}", e))
}

#[tauri::command]
pub async fn delete_workout(state: State<'_, Arc<AppState>>, id: String) -> Result<(), String> {
  state
    .store
    .delete_workout(&id)
    .await
    .map_err(|e| format!("Failed to delete workout: {}", e))
}
