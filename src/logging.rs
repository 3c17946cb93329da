use std::{
    env,
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
    sync::OnceLock,
};

use chrono::Local;

use crate::{DESKTOP_LOG_FILE, LOG_DIR_ENV};

static DESKTOP_LOG_PATH: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn init_console_logger() {
    let env = env_logger::Env::default().default_filter_or("info");
    // A second init (tests, re-entry) is harmless.
    let _ = env_logger::Builder::from_env(env).try_init();
}

pub(crate) fn default_log_dir() -> PathBuf {
    if let Ok(dir) = env::var(LOG_DIR_ENV) {
        let dir = PathBuf::from(dir.trim());
        if !dir.as_os_str().is_empty() {
            return dir;
        }
    }

    home::home_dir()
        .map(|home| home.join(".ytdownloader").join("logs"))
        .unwrap_or_else(|| env::temp_dir().join("ytdownloader").join("logs"))
}

pub(crate) fn resolve_desktop_log_path(log_dir: Option<PathBuf>, file_name: &str) -> PathBuf {
    log_dir.unwrap_or_else(default_log_dir).join(file_name)
}

fn desktop_log_path() -> &'static Path {
    DESKTOP_LOG_PATH.get_or_init(|| resolve_desktop_log_path(None, DESKTOP_LOG_FILE))
}

pub(crate) fn format_log_line(category: &str, message: &str) -> String {
    format!(
        "[{}] [{}] {}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
        category,
        message
    )
}

pub(crate) fn append_log_line(path: &Path, category: &str, message: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(format_log_line(category, message).as_bytes())
}

fn append_categorized_log(category: &str, message: &str) {
    log::info!(target: "ytdownloader", "[{category}] {message}");
    if let Err(error) = append_log_line(desktop_log_path(), category, message) {
        log::warn!(
            target: "ytdownloader",
            "failed to write desktop log {}: {error}",
            desktop_log_path().display()
        );
    }
}

pub(crate) fn append_desktop_log(message: &str) {
    append_categorized_log("desktop", message);
}

pub(crate) fn append_startup_log(message: &str) {
    append_categorized_log("startup", message);
}

pub(crate) fn append_update_log(message: &str) {
    append_categorized_log("update", message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_desktop_log_path_joins_explicit_dir() {
        let path = resolve_desktop_log_path(Some(PathBuf::from("/var/log/yt")), "desktop.log");
        assert_eq!(path, PathBuf::from("/var/log/yt").join("desktop.log"));
    }

    #[test]
    fn format_log_line_includes_category_and_message() {
        let line = format_log_line("tray", "tray enabled");
        assert!(line.contains("[tray] tray enabled"));
        assert!(line.ends_with('\n'));
    }

    #[test]
    fn append_log_line_creates_parent_dirs_and_appends() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let path = temp.path().join("nested").join("desktop.log");

        append_log_line(&path, "startup", "first").expect("first append");
        append_log_line(&path, "startup", "second").expect("second append");

        let contents = fs::read_to_string(&path).expect("read log");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("[startup] first"));
        assert!(lines[1].ends_with("[startup] second"));
    }
}
