use tauri::{
    menu::{Menu, MenuItem, PredefinedMenuItem},
    tray::{MouseButton, MouseButtonState, TrayIconBuilder, TrayIconEvent},
    AppHandle, Manager,
};

use crate::{
    append_desktop_log, tray_actions::TrayMenuAction, tray_menu_handler, window_actions,
    ShellState, Translations, TrayEnableOutcome, TrayMenuState, PRODUCT_NAME, TRAY_ID,
};

fn menu_item(
    app_handle: &AppHandle,
    action: TrayMenuAction,
    translations: &Translations,
) -> Result<MenuItem<tauri::Wry>, String> {
    MenuItem::with_id(
        app_handle,
        action.menu_id(),
        translations.i18n(action.source_label()),
        true,
        None::<&str>,
    )
    .map_err(|error| format!("Failed to create tray menu item {}: {error}", action.menu_id()))
}

/// Builds the static tray menu. The icon itself is only created once the
/// renderer asks for a tray.
pub fn build_tray_menu(
    app_handle: &AppHandle,
    translations: &Translations,
) -> Result<Menu<tauri::Wry>, String> {
    let open_item = menu_item(app_handle, TrayMenuAction::OpenApp, translations)?;
    let paste_item = menu_item(app_handle, TrayMenuAction::PasteLink, translations)?;
    let playlist_item = menu_item(app_handle, TrayMenuAction::DownloadPlaylist, translations)?;
    let quit_item = menu_item(app_handle, TrayMenuAction::Quit, translations)?;
    let separator = PredefinedMenuItem::separator(app_handle)
        .map_err(|error| format!("Failed to create tray separator menu item: {error}"))?;

    Menu::with_items(
        app_handle,
        &[
            &open_item,
            &paste_item,
            &playlist_item,
            &separator,
            &quit_item,
        ],
    )
    .map_err(|error| format!("Failed to build tray menu: {error}"))
}

fn create_tray_icon(app_handle: &AppHandle) -> Result<(), String> {
    let menu_state = app_handle
        .try_state::<TrayMenuState>()
        .ok_or_else(|| "Tray menu was not built during setup.".to_string())?;

    let tray_builder = TrayIconBuilder::with_id(TRAY_ID)
        .menu(&menu_state.menu)
        .tooltip(PRODUCT_NAME)
        .icon(tauri::include_image!("./icons/tray.png"))
        .show_menu_on_left_click(false)
        .on_menu_event(|app, event| {
            tray_menu_handler::handle_tray_menu_event(app, event.id().as_ref())
        })
        .on_tray_icon_event(|tray, event| {
            if let TrayIconEvent::Click {
                button: MouseButton::Left,
                button_state: MouseButtonState::Up,
                ..
            } = event
            {
                window_actions::show_main_window(tray.app_handle(), append_desktop_log);
            }
        });

    #[cfg(target_os = "macos")]
    let tray_builder = tray_builder.icon_as_template(true);

    tray_builder
        .build(app_handle)
        .map(|_| ())
        .map_err(|error| format!("Failed to create tray icon: {error}"))
}

pub fn set_tray_enabled(app_handle: &AppHandle, enabled: bool) {
    let state = app_handle.state::<ShellState>();
    if !enabled {
        state.disable_tray();
        append_desktop_log("tray disabled");
        return;
    }

    match state.enable_tray() {
        TrayEnableOutcome::Create => match create_tray_icon(app_handle) {
            Ok(()) => append_desktop_log("tray enabled"),
            Err(error) => {
                state.tray_creation_failed();
                append_desktop_log(&format!("failed to enable tray: {error}"));
            }
        },
        TrayEnableOutcome::Reactivate => append_desktop_log("tray re-enabled"),
        TrayEnableOutcome::AlreadyActive => append_desktop_log("tray already in use"),
    }
}
