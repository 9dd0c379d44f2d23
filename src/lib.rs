mod booking;
mod catalog;
mod contact;
mod error;
mod media;
mod pricing;
mod schedule;
mod settings;
mod submission;

use std::sync::Arc;

use booking::{
    commands::{
        advance_booking, begin_booking, discard_booking, get_booking_state, remove_media,
        retreat_booking, select_media, submit_booking, update_schedule,
    },
    BookingController,
};
use catalog::{
    commands::{get_billboard, list_billboards, list_cities},
    CatalogProvider, StaticCatalog,
};
use contact::ContactInquiry;
use media::PreviewStore;
use settings::{ScheduleDefaults, SettingsStore};
use submission::{BookingBackend, MockBookingBackend};
use tauri::{Emitter, Manager, State};

pub(crate) struct AppState {
    pub(crate) catalog: Arc<dyn CatalogProvider>,
    pub(crate) booking: BookingController,
    pub(crate) settings: SettingsStore,
}

#[tauri::command]
fn submit_contact_inquiry(inquiry: ContactInquiry) -> Result<(), String> {
    contact::record_inquiry(&inquiry).map_err(|e| e.to_string())
}

#[tauri::command]
fn get_schedule_defaults(state: State<AppState>) -> Result<ScheduleDefaults, String> {
    Ok(state.settings.schedule_defaults())
}

#[tauri::command]
fn set_schedule_defaults(
    defaults: ScheduleDefaults,
    state: State<AppState>,
    app_handle: tauri::AppHandle,
) -> Result<(), String> {
    state
        .settings
        .update_schedule_defaults(defaults)
        .map_err(|e| e.to_string())?;

    app_handle
        .emit("schedule-defaults-updated", defaults)
        .map_err(|e| e.to_string())?;

    Ok(())
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("BillABoard starting up...");

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let result = (|| -> anyhow::Result<()> {
                let app_data_dir = app
                    .path()
                    .app_data_dir()
                    .map_err(|err| anyhow::anyhow!(err))?;
                std::fs::create_dir_all(&app_data_dir)?;

                let app_cache_dir = app
                    .path()
                    .app_cache_dir()
                    .map_err(|err| anyhow::anyhow!(err))?;
                let previews = PreviewStore::new(app_cache_dir.join("media-previews"))?;

                let catalog: Arc<dyn CatalogProvider> = Arc::new(StaticCatalog::seeded());
                let backend: Arc<dyn BookingBackend> = Arc::new(MockBookingBackend::new());
                let booking_controller = BookingController::new(
                    app.handle().clone(),
                    catalog.clone(),
                    backend,
                    Arc::new(previews),
                );

                let settings_path = app_data_dir.join("settings.json");
                let settings_store = SettingsStore::new(settings_path)?;

                app.manage(AppState {
                    catalog,
                    booking: booking_controller,
                    settings: settings_store,
                });

                Ok(())
            })();

            result.map_err(|err| err.into())
        })
        .invoke_handler(tauri::generate_handler![
            list_billboards,
            get_billboard,
            list_cities,
            begin_booking,
            get_booking_state,
            select_media,
            remove_media,
            update_schedule,
            advance_booking,
            retreat_booking,
            submit_booking,
            discard_booking,
            submit_contact_inquiry,
            get_schedule_defaults,
            set_schedule_defaults,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
