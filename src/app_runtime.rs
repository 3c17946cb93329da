use std::path::PathBuf;

use tauri::{path::BaseDirectory, AppHandle, Manager, RunEvent, WindowEvent};

use crate::{
    append_desktop_log, append_startup_log, exit_events, logging, translations, tray_setup,
    update_flow::UpdateState, window_actions, ShellState, Translations, TrayMenuState,
    DESKTOP_LOG_FILE, MAIN_WINDOW_LABEL, TRANSLATIONS_DIR_NAME,
};

fn resolve_translations_dir(app_handle: &AppHandle) -> PathBuf {
    if let Some(dir) = translations::translations_dir_override() {
        return dir;
    }

    app_handle
        .path()
        .resolve(TRANSLATIONS_DIR_NAME, BaseDirectory::Resource)
        .unwrap_or_else(|error| {
            append_startup_log(&format!(
                "failed to resolve bundled translations dir: {error}"
            ));
            PathBuf::from(TRANSLATIONS_DIR_NAME)
        })
}

fn load_translations(app_handle: &AppHandle) -> Translations {
    let locale = translations::resolve_locale();
    append_startup_log(&format!("locale: {locale}"));
    let translations = Translations::load(&resolve_translations_dir(app_handle), &locale);
    append_startup_log(&format!(
        "translation table: {}",
        translations.locale().unwrap_or("none")
    ));
    translations
}

/// Release builds embed the updater signing key from the build environment;
/// the key in `tauri.conf.json` is only a placeholder.
pub(crate) fn embedded_updater_pubkey(raw: Option<&'static str>) -> Option<&'static str> {
    raw.map(str::trim).filter(|key| !key.is_empty())
}

fn updater_builder() -> tauri_plugin_updater::Builder {
    let builder = tauri_plugin_updater::Builder::new();
    match embedded_updater_pubkey(option_env!("YTDOWNLOADER_UPDATER_PUBKEY")) {
        Some(pubkey) => builder.pubkey(pubkey),
        None => {
            append_startup_log(
                "updater public key not embedded; downloaded updates will fail verification",
            );
            builder
        }
    }
}

pub(crate) fn run() {
    logging::init_console_logger();
    append_startup_log("desktop process starting");
    append_startup_log(&format!(
        "desktop log path: {}",
        logging::resolve_desktop_log_path(None, DESKTOP_LOG_FILE).display()
    ));

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app_handle, _args, _cwd| {
            append_desktop_log("second instance launched, focusing primary window");
            window_actions::show_main_window(app_handle, append_desktop_log);
        }))
        .plugin(updater_builder().build())
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_clipboard_manager::init())
        .manage(ShellState::default())
        .manage(UpdateState::default())
        .invoke_handler(tauri::generate_handler![
            crate::ipc_commands::use_tray,
            crate::ipc_commands::reload,
            crate::ipc_commands::get_version,
            crate::ipc_commands::load_win,
            crate::ipc_commands::load_page,
            crate::ipc_commands::close_secondary,
            crate::ipc_commands::select_location,
            crate::ipc_commands::select_config,
            crate::ipc_commands::ready_for_links,
        ])
        .on_window_event(|window, event| {
            if window.label() != MAIN_WINDOW_LABEL {
                return;
            }

            if let WindowEvent::CloseRequested { api, .. } = event {
                let app_handle = window.app_handle();
                let state = app_handle.state::<ShellState>();
                match window_actions::decide_close(state.is_quitting(), state.is_tray_active()) {
                    window_actions::CloseDecision::HideToTray => {
                        api.prevent_close();
                        window_actions::hide_main_window(app_handle, append_desktop_log);
                    }
                    window_actions::CloseDecision::Close => {}
                }
            }
        })
        .setup(|app| {
            let app_handle = app.handle().clone();
            append_startup_log(&format!(
                "version: {}",
                app_handle.package_info().version
            ));

            let translations = load_translations(&app_handle);
            match tray_setup::build_tray_menu(&app_handle, &translations) {
                Ok(menu) => {
                    app_handle.manage(TrayMenuState { menu });
                }
                Err(error) => append_startup_log(&format!("failed to build tray menu: {error}")),
            }
            app_handle.manage(translations);

            window_actions::create_primary_window(&app_handle, append_startup_log)?;
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| match event {
            RunEvent::Exit => exit_events::handle_exit_event(app_handle),
            #[cfg(target_os = "macos")]
            RunEvent::Reopen {
                has_visible_windows: false,
                ..
            } => exit_events::handle_reopen(app_handle),
            _ => {}
        });
}
