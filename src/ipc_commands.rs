use tauri::{AppHandle, Manager};

use crate::{
    append_desktop_log, page_paths, secondary_window, secondary_window::PickTarget,
    tray_menu_handler, tray_setup, window_actions, ShellState, CONFIG_PATH_EVENT,
    DOWNLOAD_PATH_EVENT, VERSION_EVENT,
};

#[tauri::command]
pub(crate) fn use_tray(app_handle: AppHandle, enabled: bool) {
    tray_setup::set_tray_enabled(&app_handle, enabled);
}

#[tauri::command]
pub(crate) fn reload(app_handle: AppHandle) {
    window_actions::reload_windows(&app_handle, append_desktop_log);
}

#[tauri::command]
pub(crate) fn get_version(app_handle: AppHandle) {
    let version = app_handle.package_info().version.to_string();
    secondary_window::emit_to_secondary(&app_handle, VERSION_EVENT, version, append_desktop_log);
}

#[tauri::command]
pub(crate) fn load_win(app_handle: AppHandle, file: String) -> Result<(), String> {
    let page = page_paths::normalize_page(&file).inspect_err(|error| {
        append_desktop_log(&format!("load_win rejected: {error}"));
    })?;
    window_actions::navigate_main_window(&app_handle, &page, append_desktop_log);
    Ok(())
}

// Window creation must not run on the main thread from a command on Windows.
#[tauri::command]
pub(crate) async fn load_page(app_handle: AppHandle, file: String) -> Result<(), String> {
    let page = page_paths::normalize_page(&file).inspect_err(|error| {
        append_desktop_log(&format!("load_page rejected: {error}"));
    })?;
    secondary_window::open_secondary_window(&app_handle, &page, append_desktop_log).inspect_err(
        |error| append_desktop_log(&format!("load_page failed: {error}")),
    )
}

#[tauri::command]
pub(crate) fn close_secondary(app_handle: AppHandle) {
    secondary_window::close_secondary_window(&app_handle, append_desktop_log);
}

#[tauri::command]
pub(crate) fn select_location(app_handle: AppHandle) {
    secondary_window::pick_for_secondary(
        &app_handle,
        PickTarget::DownloadFolder,
        DOWNLOAD_PATH_EVENT,
        append_desktop_log,
    );
}

#[tauri::command]
pub(crate) fn select_config(app_handle: AppHandle) {
    secondary_window::pick_for_secondary(
        &app_handle,
        PickTarget::ConfigFile,
        CONFIG_PATH_EVENT,
        append_desktop_log,
    );
}

#[tauri::command]
pub(crate) fn ready_for_links(app_handle: AppHandle) {
    let state = app_handle.state::<ShellState>();
    tray_menu_handler::deliver_pending_link(
        state.inner(),
        &tray_menu_handler::AppWindows::new(&app_handle),
    );
}
