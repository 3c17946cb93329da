use std::process::{Command, Stdio};
use url::Url;

pub(crate) fn parse_openable_url(raw_url: &str) -> Result<Url, String> {
    let trimmed = raw_url.trim();
    if trimmed.is_empty() {
        return Err("Missing external URL.".to_string());
    }

    let parsed = Url::parse(trimmed).map_err(|error| format!("Invalid URL: {error}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(format!(
            "Unsupported URL scheme '{scheme}', only http/https are allowed."
        )),
    }
}

fn spawn_detached(program: &str, args: &[&str]) -> Result<(), String> {
    Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|error| format!("Failed to run '{program}': {error}"))
}

#[cfg(target_os = "macos")]
fn open_with_system_browser(url: &str) -> Result<(), String> {
    spawn_detached("open", &[url])
}

#[cfg(target_os = "windows")]
fn open_with_system_browser(url: &str) -> Result<(), String> {
    spawn_detached("rundll32", &["url.dll,FileProtocolHandler", url])
}

#[cfg(all(unix, not(target_os = "macos")))]
fn open_with_system_browser(url: &str) -> Result<(), String> {
    spawn_detached("xdg-open", &[url])
}

#[cfg(not(any(target_os = "macos", target_os = "windows", unix)))]
fn open_with_system_browser(_url: &str) -> Result<(), String> {
    Err("Opening external URLs is not supported on this platform.".to_string())
}

pub(crate) fn open_external_url(raw_url: &str) -> Result<(), String> {
    let parsed = parse_openable_url(raw_url)?;
    open_with_system_browser(parsed.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_openable_url_accepts_release_archive() {
        let parsed = parse_openable_url(crate::MACOS_RELEASE_DOWNLOAD_URL).expect("valid url");
        assert_eq!(parsed.host_str(), Some("github.com"));
    }

    #[test]
    fn parse_openable_url_rejects_empty_and_non_http() {
        assert!(parse_openable_url("  ").is_err());
        assert!(parse_openable_url("file:///etc/passwd").is_err());
        assert!(parse_openable_url("not a url").is_err());
    }
}
