use crate::PLAYLIST_PAGE;

/// Maps a renderer-supplied page path onto a page of the bundled frontend.
///
/// The renderer historically addressed pages relative to the install dir
/// (`html/playlist.html`, `../html/index.html`); the frontend dist root is
/// the `html` directory itself, so those prefixes are dropped.
pub(crate) fn normalize_page(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Missing page path.".to_string());
    }
    if trimmed.contains("://") || trimmed.contains(':') {
        return Err(format!("Refusing to load non-local page '{trimmed}'."));
    }

    let mut page = trimmed.replace('\\', "/");
    loop {
        let stripped = page
            .strip_prefix("./")
            .or_else(|| page.strip_prefix("../"))
            .or_else(|| page.strip_prefix("html/"))
            .or_else(|| page.strip_prefix('/'))
            .map(str::to_string);
        match stripped {
            Some(rest) => page = rest,
            None => break,
        }
    }

    if page.is_empty() || page.split('/').any(|segment| segment == "..") {
        return Err(format!("Invalid page path '{trimmed}'."));
    }
    Ok(page)
}

pub(crate) fn is_playlist_page(page: &str) -> bool {
    page.contains(PLAYLIST_PAGE)
}

/// Script that points the current webview at another bundled page.
pub(crate) fn navigation_script(page: &str) -> String {
    let target = serde_json::Value::String(format!("/{page}"));
    format!("window.location.replace({target});")
}
