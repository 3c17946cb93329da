use tauri::{AppHandle, Manager, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

use crate::{page_paths, INDEX_PAGE, MAIN_WINDOW_LABEL, PRODUCT_NAME};

pub(crate) fn main_window(app_handle: &AppHandle) -> Option<WebviewWindow> {
    app_handle.get_webview_window(MAIN_WINDOW_LABEL)
}

/// Builds the primary window hidden, then maximizes and reveals it.
pub(crate) fn build_main_window<F>(app_handle: &AppHandle, log: F) -> Result<WebviewWindow, String>
where
    F: Fn(&str),
{
    let builder = WebviewWindowBuilder::new(
        app_handle,
        MAIN_WINDOW_LABEL,
        WebviewUrl::App(INDEX_PAGE.into()),
    )
    .title(PRODUCT_NAME)
    .visible(false);

    #[cfg(target_os = "linux")]
    let builder = builder.transparent(true);

    let window = builder
        .build()
        .map_err(|error| format!("Failed to create primary window: {error}"))?;

    if let Err(error) = window.maximize() {
        log(&format!("failed to maximize primary window: {error}"));
    }
    if let Err(error) = window.show() {
        log(&format!("failed to show primary window: {error}"));
    }
    Ok(window)
}

pub(crate) fn show_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(window) = main_window(app_handle) else {
        log("show_main_window skipped: primary window not found");
        return;
    };

    if let Err(error) = window.unminimize() {
        log(&format!("failed to unminimize primary window: {error}"));
    }
    if let Err(error) = window.show() {
        log(&format!("failed to show primary window: {error}"));
    }
    if let Err(error) = window.set_focus() {
        log(&format!("failed to focus primary window: {error}"));
    }
}

pub(crate) fn hide_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(window) = main_window(app_handle) else {
        log("hide_main_window skipped: primary window not found");
        return;
    };

    if let Err(error) = window.hide() {
        log(&format!("failed to hide primary window: {error}"));
    }
}

pub(crate) fn reload_window<F>(window: &WebviewWindow, log: F)
where
    F: Fn(&str),
{
    if let Err(error) = window.eval("window.location.reload();") {
        log(&format!("failed to reload window {}: {error}", window.label()));
    }
}

pub(crate) fn load_page_in_main_window<F>(app_handle: &AppHandle, page: &str, log: F)
where
    F: Fn(&str),
{
    let Some(window) = main_window(app_handle) else {
        log(&format!("load {page} skipped: primary window not found"));
        return;
    };

    if let Err(error) = window.eval(&page_paths::navigation_script(page)) {
        log(&format!("failed to load {page} in primary window: {error}"));
    }
}
