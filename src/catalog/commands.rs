use tauri::State;

use crate::AppState;

use super::filter::{cities, filter_listings, CatalogFilter};
use super::listing::BillboardListing;

#[tauri::command]
pub fn list_billboards(
    state: State<'_, AppState>,
    filter: Option<CatalogFilter>,
) -> Result<Vec<BillboardListing>, String> {
    let listings = state.catalog.list();
    Ok(filter_listings(&listings, &filter.unwrap_or_default()))
}

#[tauri::command]
pub fn get_billboard(state: State<'_, AppState>, id: u32) -> Result<BillboardListing, String> {
    state
        .catalog
        .find(id)
        .ok_or_else(|| format!("no billboard with id {id}"))
}

#[tauri::command]
pub fn list_cities(state: State<'_, AppState>) -> Result<Vec<String>, String> {
    Ok(cities(&state.catalog.list()))
}
