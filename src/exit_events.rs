use tauri::{AppHandle, Manager};

use crate::{append_desktop_log, update_flow, ShellState};
#[cfg(target_os = "macos")]
use crate::{main_window, window_actions};

pub(crate) fn handle_exit_event(app_handle: &AppHandle) {
    app_handle.state::<ShellState>().mark_quitting();
    append_desktop_log("desktop process exiting");
    update_flow::install_pending_update(app_handle);
}

/// Recreates the primary window when the app is activated with none open.
#[cfg(target_os = "macos")]
pub(crate) fn handle_reopen(app_handle: &AppHandle) {
    if main_window::main_window(app_handle).is_some() {
        window_actions::show_main_window(app_handle, append_desktop_log);
        return;
    }

    if let Err(error) = window_actions::create_primary_window(app_handle, append_desktop_log) {
        append_desktop_log(&format!("failed to recreate primary window: {error}"));
    }
}
