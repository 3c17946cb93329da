pub const TRAY_MENU_OPEN_APP: &str = "tray_open_app";
pub const TRAY_MENU_PASTE_LINK: &str = "tray_paste_link";
pub const TRAY_MENU_DOWNLOAD_PLAYLIST: &str = "tray_download_playlist";
pub const TRAY_MENU_QUIT: &str = "tray_quit";

pub const TRAY_LABEL_OPEN_APP: &str = "Open app";
pub const TRAY_LABEL_PASTE_LINK: &str = "Paste video link";
pub const TRAY_LABEL_DOWNLOAD_PLAYLIST: &str = "Download playlist";
pub const TRAY_LABEL_QUIT: &str = "Quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayMenuAction {
    OpenApp,
    PasteLink,
    DownloadPlaylist,
    Quit,
}

impl TrayMenuAction {
    pub fn menu_id(self) -> &'static str {
        match self {
            TrayMenuAction::OpenApp => TRAY_MENU_OPEN_APP,
            TrayMenuAction::PasteLink => TRAY_MENU_PASTE_LINK,
            TrayMenuAction::DownloadPlaylist => TRAY_MENU_DOWNLOAD_PLAYLIST,
            TrayMenuAction::Quit => TRAY_MENU_QUIT,
        }
    }

    /// Untranslated label; run through `Translations::i18n` before display.
    pub fn source_label(self) -> &'static str {
        match self {
            TrayMenuAction::OpenApp => TRAY_LABEL_OPEN_APP,
            TrayMenuAction::PasteLink => TRAY_LABEL_PASTE_LINK,
            TrayMenuAction::DownloadPlaylist => TRAY_LABEL_DOWNLOAD_PLAYLIST,
            TrayMenuAction::Quit => TRAY_LABEL_QUIT,
        }
    }
}

pub fn action_from_menu_id(menu_id: &str) -> Option<TrayMenuAction> {
    match menu_id {
        TRAY_MENU_OPEN_APP => Some(TrayMenuAction::OpenApp),
        TRAY_MENU_PASTE_LINK => Some(TrayMenuAction::PasteLink),
        TRAY_MENU_DOWNLOAD_PLAYLIST => Some(TrayMenuAction::DownloadPlaylist),
        TRAY_MENU_QUIT => Some(TrayMenuAction::Quit),
        _ => None,
    }
}
