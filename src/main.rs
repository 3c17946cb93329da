#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_runtime;
mod app_types;
mod exit_events;
mod external_url;
mod ipc_commands;
mod logging;
mod main_window;
mod page_paths;
mod secondary_window;
mod translations;
mod tray_actions;
mod tray_menu_handler;
mod tray_setup;
mod update_flow;
mod window_actions;

pub(crate) use app_constants::*;
pub(crate) use app_types::{LinkDelivery, ShellState, TrayEnableOutcome, TrayMenuState};
pub(crate) use logging::{append_desktop_log, append_startup_log, append_update_log};
pub(crate) use translations::Translations;

fn main() {
    app_runtime::run();
}
