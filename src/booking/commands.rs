use std::path::PathBuf;

use tauri::State;

use crate::booking::{BookingController, BookingSnapshot, ScheduleSelection};
use crate::AppState;

fn controller_from_state(state: &State<'_, AppState>) -> BookingController {
    state.booking.clone()
}

#[tauri::command]
pub async fn begin_booking(
    state: State<'_, AppState>,
    billboard_id: u32,
) -> Result<BookingSnapshot, String> {
    let controller = controller_from_state(&state);
    let defaults = state.settings.schedule_defaults();
    controller
        .begin(billboard_id, defaults)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn get_booking_state(state: State<'_, AppState>) -> Result<BookingSnapshot, String> {
    let controller = controller_from_state(&state);
    controller.snapshot().await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn select_media(
    state: State<'_, AppState>,
    path: String,
) -> Result<BookingSnapshot, String> {
    let controller = controller_from_state(&state);
    controller
        .select_media(PathBuf::from(path))
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn remove_media(state: State<'_, AppState>) -> Result<BookingSnapshot, String> {
    let controller = controller_from_state(&state);
    controller.remove_media().await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn update_schedule(
    state: State<'_, AppState>,
    schedule: ScheduleSelection,
) -> Result<BookingSnapshot, String> {
    let controller = controller_from_state(&state);
    controller
        .update_schedule(schedule)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn advance_booking(state: State<'_, AppState>) -> Result<BookingSnapshot, String> {
    let controller = controller_from_state(&state);
    controller.advance().await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn retreat_booking(state: State<'_, AppState>) -> Result<BookingSnapshot, String> {
    let controller = controller_from_state(&state);
    controller.retreat().await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn submit_booking(state: State<'_, AppState>) -> Result<BookingSnapshot, String> {
    let controller = controller_from_state(&state);
    controller.submit().await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn discard_booking(state: State<'_, AppState>) -> Result<(), String> {
    let controller = controller_from_state(&state);
    controller.discard().await.map_err(|e| e.to_string())
}
