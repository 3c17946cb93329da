use tauri::{AppHandle, Manager};

use crate::{main_window, secondary_window, update_flow, ShellState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CloseDecision {
    HideToTray,
    Close,
}

pub(crate) fn decide_close(quitting: bool, tray_active: bool) -> CloseDecision {
    if !quitting && tray_active {
        CloseDecision::HideToTray
    } else {
        CloseDecision::Close
    }
}

pub fn create_primary_window<F>(app_handle: &AppHandle, log: F) -> Result<(), String>
where
    F: Fn(&str),
{
    main_window::build_main_window(app_handle, &log)?;
    app_handle.state::<ShellState>().set_index_open(true);
    update_flow::spawn_update_check(app_handle.clone());
    Ok(())
}

pub fn show_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    main_window::show_main_window(app_handle, log);
}

pub fn hide_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    main_window::hide_main_window(app_handle, log);
}

/// Reloads the primary window and, when open, the secondary window.
pub fn reload_windows<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    if let Some(window) = main_window::main_window(app_handle) {
        main_window::reload_window(&window, &log);
    }
    if let Some(window) = secondary_window::secondary_window(app_handle) {
        main_window::reload_window(&window, &log);
    }
}

pub fn navigate_main_window<F>(app_handle: &AppHandle, page: &str, log: F)
where
    F: Fn(&str),
{
    app_handle.state::<ShellState>().record_navigation(page);
    main_window::load_page_in_main_window(app_handle, page, log);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_hides_when_tray_active_and_not_quitting() {
        assert_eq!(decide_close(false, true), CloseDecision::HideToTray);
    }

    #[test]
    fn close_proceeds_after_quit_request() {
        assert_eq!(decide_close(true, true), CloseDecision::Close);
    }

    #[test]
    fn close_proceeds_without_tray() {
        assert_eq!(decide_close(false, false), CloseDecision::Close);
        assert_eq!(decide_close(true, false), CloseDecision::Close);
    }
}
