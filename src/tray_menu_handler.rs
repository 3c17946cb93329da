use tauri::{AppHandle, Emitter, Manager};
use tauri_plugin_clipboard_manager::ClipboardExt;

use crate::{
    append_desktop_log, main_window, tray_actions, window_actions, LinkDelivery, ShellState,
    INDEX_PAGE, LINK_EVENT, MAIN_WINDOW_LABEL, PLAYLIST_PAGE,
};

/// What the tray menu is allowed to do to the shell.
pub(crate) trait TrayCommands {
    fn show_main(&self);
    fn paste_link(&self);
    fn download_playlist(&self);
    fn quit(&self);
}

/// Window-side effects the tray controller needs from the running app.
pub(crate) trait ShellWindows {
    fn show_main(&self);
    fn load_main_page(&self, page: &str);
    fn emit_link(&self, text: String);
    fn read_clipboard(&self) -> String;
    fn exit(&self);
}

pub(crate) fn dispatch_tray_action<C>(commands: &C, action: tray_actions::TrayMenuAction)
where
    C: TrayCommands + ?Sized,
{
    match action {
        tray_actions::TrayMenuAction::OpenApp => commands.show_main(),
        tray_actions::TrayMenuAction::PasteLink => commands.paste_link(),
        tray_actions::TrayMenuAction::DownloadPlaylist => commands.download_playlist(),
        tray_actions::TrayMenuAction::Quit => commands.quit(),
    }
}

pub fn handle_tray_menu_event(app_handle: &AppHandle, menu_id: &str) {
    let Some(action) = tray_actions::action_from_menu_id(menu_id) else {
        append_desktop_log(&format!("ignoring unknown tray menu id: {menu_id}"));
        return;
    };

    let state = app_handle.state::<ShellState>();
    let windows = AppWindows::new(app_handle);
    dispatch_tray_action(&ShellController::new(state.inner(), &windows), action);
}

/// Hands a parked link to the index page once it reports ready.
pub(crate) fn deliver_pending_link<W>(state: &ShellState, windows: &W)
where
    W: ShellWindows + ?Sized,
{
    if let Some(text) = state.take_pending_link() {
        windows.emit_link(text);
    }
}

pub(crate) struct ShellController<'a, W: ?Sized> {
    state: &'a ShellState,
    windows: &'a W,
}

impl<'a, W: ShellWindows + ?Sized> ShellController<'a, W> {
    pub(crate) fn new(state: &'a ShellState, windows: &'a W) -> Self {
        Self { state, windows }
    }

    fn navigate(&self, page: &str) {
        self.state.record_navigation(page);
        self.windows.load_main_page(page);
    }
}

impl<W: ShellWindows + ?Sized> TrayCommands for ShellController<'_, W> {
    fn show_main(&self) {
        self.windows.show_main();
    }

    fn paste_link(&self) {
        match self.state.paste_link(self.windows.read_clipboard()) {
            LinkDelivery::Immediate(text) => {
                self.windows.show_main();
                self.windows.emit_link(text);
            }
            LinkDelivery::AfterIndexReload => {
                self.navigate(INDEX_PAGE);
                self.windows.show_main();
            }
            LinkDelivery::ReplacedParked => self.windows.show_main(),
        }
    }

    fn download_playlist(&self) {
        self.navigate(PLAYLIST_PAGE);
        self.windows.show_main();
    }

    fn quit(&self) {
        self.state.mark_quitting();
        append_desktop_log("tray quit requested, exiting desktop process");
        self.windows.exit();
    }
}

pub(crate) struct AppWindows<'a> {
    app_handle: &'a AppHandle,
}

impl<'a> AppWindows<'a> {
    pub(crate) fn new(app_handle: &'a AppHandle) -> Self {
        Self { app_handle }
    }
}

impl ShellWindows for AppWindows<'_> {
    fn show_main(&self) {
        window_actions::show_main_window(self.app_handle, append_desktop_log);
    }

    fn load_main_page(&self, page: &str) {
        main_window::load_page_in_main_window(self.app_handle, page, append_desktop_log);
    }

    fn emit_link(&self, text: String) {
        if let Err(error) = self.app_handle.emit_to(MAIN_WINDOW_LABEL, LINK_EVENT, text) {
            append_desktop_log(&format!("failed to deliver link to primary window: {error}"));
        }
    }

    fn read_clipboard(&self) -> String {
        match self.app_handle.clipboard().read_text() {
            Ok(text) => text,
            Err(error) => {
                append_desktop_log(&format!("failed to read clipboard text: {error}"));
                String::new()
            }
        }
    }

    fn exit(&self) {
        self.app_handle.exit(0);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::tray_actions::TrayMenuAction;

    #[derive(Default)]
    struct RecordingWindows {
        clipboard: RefCell<String>,
        calls: RefCell<Vec<String>>,
    }

    impl RecordingWindows {
        fn with_clipboard(text: &str) -> Self {
            let windows = Self::default();
            windows.set_clipboard(text);
            windows
        }

        fn set_clipboard(&self, text: &str) {
            *self.clipboard.borrow_mut() = text.to_string();
        }

        fn record(&self, call: impl Into<String>) {
            self.calls.borrow_mut().push(call.into());
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl ShellWindows for RecordingWindows {
        fn show_main(&self) {
            self.record("show main");
        }

        fn load_main_page(&self, page: &str) {
            self.record(format!("load {page}"));
        }

        fn emit_link(&self, text: String) {
            self.record(format!("emit link {text}"));
        }

        fn read_clipboard(&self) -> String {
            self.clipboard.borrow().clone()
        }

        fn exit(&self) {
            self.record("exit");
        }
    }

    fn run(state: &ShellState, windows: &RecordingWindows, action: TrayMenuAction) {
        dispatch_tray_action(&ShellController::new(state, windows), action);
    }

    #[test]
    fn paste_link_on_index_page_delivers_immediately_once() {
        let state = ShellState::default();
        let windows = RecordingWindows::with_clipboard("https://youtu.be/abc");

        run(&state, &windows, TrayMenuAction::PasteLink);
        deliver_pending_link(&state, &windows);

        assert_eq!(
            windows.calls(),
            vec!["show main", "emit link https://youtu.be/abc"]
        );
    }

    #[test]
    fn paste_link_on_playlist_page_reloads_index_and_delivers_once_when_ready() {
        let state = ShellState::default();
        let windows = RecordingWindows::with_clipboard("https://youtu.be/xyz");

        run(&state, &windows, TrayMenuAction::DownloadPlaylist);
        assert!(!state.is_index_open());
        run(&state, &windows, TrayMenuAction::PasteLink);
        deliver_pending_link(&state, &windows);
        deliver_pending_link(&state, &windows);

        assert_eq!(
            windows.calls(),
            vec![
                "load playlist.html",
                "show main",
                "load index.html",
                "show main",
                "emit link https://youtu.be/xyz",
            ]
        );
        assert!(state.is_index_open());
    }

    #[test]
    fn second_paste_while_index_reloads_replaces_parked_link() {
        let state = ShellState::default();
        let windows = RecordingWindows::with_clipboard("first");

        run(&state, &windows, TrayMenuAction::DownloadPlaylist);
        run(&state, &windows, TrayMenuAction::PasteLink);
        windows.set_clipboard("second");
        run(&state, &windows, TrayMenuAction::PasteLink);
        deliver_pending_link(&state, &windows);

        assert_eq!(
            windows.calls(),
            vec![
                "load playlist.html",
                "show main",
                "load index.html",
                "show main",
                "show main",
                "emit link second",
            ]
        );
    }

    #[test]
    fn ready_without_parked_link_emits_nothing() {
        let state = ShellState::default();
        let windows = RecordingWindows::default();

        deliver_pending_link(&state, &windows);

        assert!(windows.calls().is_empty());
    }

    #[test]
    fn quit_marks_quitting_before_exit() {
        let state = ShellState::default();
        let windows = RecordingWindows::default();

        run(&state, &windows, TrayMenuAction::Quit);

        assert!(state.is_quitting());
        assert_eq!(windows.calls(), vec!["exit"]);
    }

    #[test]
    fn open_app_only_shows_main_window() {
        let state = ShellState::default();
        let windows = RecordingWindows::default();

        run(&state, &windows, TrayMenuAction::OpenApp);

        assert_eq!(windows.calls(), vec!["show main"]);
        assert!(!state.is_quitting());
    }
}
