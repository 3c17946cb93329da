pub(crate) const PRODUCT_NAME: &str = "ytDownloader";

pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const SECONDARY_WINDOW_LABEL: &str = "secondary";

pub(crate) const INDEX_PAGE: &str = "index.html";
pub(crate) const PLAYLIST_PAGE: &str = "playlist.html";

pub(crate) const TRAY_ID: &str = "ytdownloader-tray";

pub(crate) const LINK_EVENT: &str = "link";
pub(crate) const VERSION_EVENT: &str = "version";
pub(crate) const DOWNLOAD_PATH_EVENT: &str = "downloadPath";
pub(crate) const CONFIG_PATH_EVENT: &str = "configPath";

pub(crate) const DEFAULT_LOCALE: &str = "en";
pub(crate) const TRANSLATIONS_DIR_NAME: &str = "translations";
pub(crate) const LOCALE_ENV: &str = "YTDOWNLOADER_LOCALE";
pub(crate) const TRANSLATIONS_DIR_ENV: &str = "YTDOWNLOADER_TRANSLATIONS_DIR";
pub(crate) const LOG_DIR_ENV: &str = "YTDOWNLOADER_LOG_DIR";

pub(crate) const DESKTOP_LOG_FILE: &str = "desktop.log";

pub(crate) const MACOS_RELEASE_DOWNLOAD_URL: &str =
    "https://github.com/aandrew-me/ytDownloader/releases/latest/download/YTDownloader_Mac.zip";
