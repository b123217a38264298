mod analytics;
mod commands;
mod models;
mod store;

#[cfg(test)]
mod test_utils;

use std::sync::Arc;
use store::AppState;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
  // Load environment variables from .env file
  dotenvy::dotenv().ok();

  tauri::Builder::default()
    .plugin(tauri_plugin_opener::init())
    .setup(|app| {
      // Configure the backend client
      match store::StoreConfig::from_env().and_then(store::StoreClient::new) {
        Ok(client) => {
          app.handle().manage(Arc::new(AppState::new(client)));
          println!("Backend client ready");
        }
        Err(e) => {
          eprintln!("Failed to configure backend client: {}", e);
        }
      }
      Ok(())
    })
    .invoke_handler(tauri::generate_handler![
      // Athlete commands
      commands::athletes::get_athletes,
      commands::athletes::create_athlete,
      // Workout commands
      commands::workouts::get_workouts,
      commands::workouts::create_workout,
      commands::workouts::delete_workout,
      // Performance metric commands
      commands::metrics::get_metrics,
      commands::metrics::create_metric,
      commands::metrics::delete_metric,
      // Health stat commands
      commands::health::get_health_stats,
      commands::health::create_health_stat,
      commands::health::delete_health_stat,
      // Progress commands
      commands::progress::get_progress_overview,
      commands::progress::get_metric_chart,
    ])
    .run(tauri::generate_context!())
    .expect("error while running tauri application");
}
