use serde::Serialize;
use tauri::{AppHandle, Emitter, Manager, WebviewUrl, WebviewWindow, WebviewWindowBuilder};
use tauri_plugin_dialog::{DialogExt, FilePath};

use crate::{main_window, page_paths, PRODUCT_NAME, SECONDARY_WINDOW_LABEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PickTarget {
    DownloadFolder,
    ConfigFile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SecondaryOpen {
    ReuseExisting,
    CreateNew,
}

/// Only one secondary window may exist; an open one gets the new page.
pub(crate) fn decide_secondary_open(already_open: bool) -> SecondaryOpen {
    if already_open {
        SecondaryOpen::ReuseExisting
    } else {
        SecondaryOpen::CreateNew
    }
}

pub(crate) fn secondary_window(app_handle: &AppHandle) -> Option<WebviewWindow> {
    app_handle.get_webview_window(SECONDARY_WINDOW_LABEL)
}

/// Opens `page` in the secondary window, reusing an open one.
pub(crate) fn open_secondary_window<F>(
    app_handle: &AppHandle,
    page: &str,
    log: F,
) -> Result<(), String>
where
    F: Fn(&str),
{
    let existing = secondary_window(app_handle);
    if let (SecondaryOpen::ReuseExisting, Some(existing)) =
        (decide_secondary_open(existing.is_some()), existing)
    {
        log(&format!("secondary window already open, loading {page} into it"));
        existing
            .eval(&page_paths::navigation_script(page))
            .map_err(|error| format!("Failed to load {page} in secondary window: {error}"))?;
        return existing
            .show()
            .and_then(|()| existing.set_focus())
            .map_err(|error| format!("Failed to show secondary window: {error}"));
    }

    let parent = main_window::main_window(app_handle)
        .ok_or_else(|| "Cannot open secondary window without primary window.".to_string())?;

    let window = WebviewWindowBuilder::new(
        app_handle,
        SECONDARY_WINDOW_LABEL,
        WebviewUrl::App(page.into()),
    )
    .title(PRODUCT_NAME)
    .visible(false)
    .parent(&parent)
    .map_err(|error| format!("Failed to parent secondary window: {error}"))?
    .build()
    .map_err(|error| format!("Failed to create secondary window: {error}"))?;

    if let Err(error) = window.remove_menu() {
        log(&format!("failed to strip secondary window menu: {error}"));
    }
    window
        .show()
        .map_err(|error| format!("Failed to show secondary window: {error}"))
}

pub(crate) fn close_secondary_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(window) = secondary_window(app_handle) else {
        log("close_secondary skipped: no secondary window open");
        return;
    };

    if let Err(error) = window.close() {
        log(&format!("failed to close secondary window: {error}"));
    }
}

pub(crate) fn emit_to_secondary<S, F>(app_handle: &AppHandle, event: &str, payload: S, log: F)
where
    S: Serialize + Clone,
    F: Fn(&str),
{
    if secondary_window(app_handle).is_none() {
        log(&format!("{event} not sent: no secondary window open"));
        return;
    }

    if let Err(error) = app_handle.emit_to(SECONDARY_WINDOW_LABEL, event, payload) {
        log(&format!("failed to emit {event} to secondary window: {error}"));
    }
}

pub(crate) fn picked_paths(path: Option<FilePath>) -> Option<Vec<String>> {
    path.map(|path| vec![path.to_string()])
}

/// Shows a native picker parented to the secondary window. The chosen path is
/// sent back as `event`; a cancelled picker sends nothing.
pub(crate) fn pick_for_secondary<F>(
    app_handle: &AppHandle,
    target: PickTarget,
    event: &'static str,
    log: F,
) where
    F: Fn(&str) + Send + Copy + 'static,
{
    let Some(window) = secondary_window(app_handle) else {
        log(&format!("{event} picker skipped: no secondary window open"));
        return;
    };

    let reply_handle = app_handle.clone();
    let on_pick = move |path: Option<FilePath>| match picked_paths(path) {
        Some(paths) => emit_to_secondary(&reply_handle, event, paths, log),
        None => log(&format!("{event} picker cancelled")),
    };

    let dialog = app_handle.dialog().file().set_parent(&window);
    match target {
        PickTarget::DownloadFolder => dialog.pick_folder(on_pick),
        PickTarget::ConfigFile => dialog.pick_file(on_pick),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn picked_paths_wraps_selection_in_list() {
        let picked = picked_paths(Some(FilePath::Path(PathBuf::from("/home/me/Videos"))));
        assert_eq!(picked, Some(vec!["/home/me/Videos".to_string()]));
    }

    #[test]
    fn open_secondary_reuses_existing_window() {
        assert_eq!(decide_secondary_open(true), SecondaryOpen::ReuseExisting);
        assert_eq!(decide_secondary_open(false), SecondaryOpen::CreateNew);
    }

    #[test]
    fn picked_paths_is_none_when_cancelled() {
        assert_eq!(picked_paths(None), None);
    }
}
