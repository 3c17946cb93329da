use std::{
    collections::HashMap,
    env, fs,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::{append_startup_log, DEFAULT_LOCALE, LOCALE_ENV, TRANSLATIONS_DIR_ENV};

#[derive(Debug, Error)]
pub(crate) enum TranslationError {
    #[error("failed to read translation file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse translation file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Phrase table keyed by the English source phrase.
#[derive(Debug, Clone, Default)]
pub(crate) struct Translations {
    locale: Option<String>,
    phrases: HashMap<String, String>,
}

impl Translations {
    /// Loads `<dir>/<locale>.json`, falling back to the bare language and then
    /// to the default locale. Never fails; an empty table translates nothing.
    pub(crate) fn load(dir: &Path, locale: &str) -> Self {
        for candidate in locale_candidates(locale) {
            let path = dir.join(format!("{candidate}.json"));
            if !path.is_file() {
                continue;
            }

            match read_phrase_table(&path) {
                Ok(phrases) => {
                    append_startup_log(&format!(
                        "loaded {} translations for locale {} from {}",
                        phrases.len(),
                        candidate,
                        path.display()
                    ));
                    return Self {
                        locale: Some(candidate),
                        phrases,
                    };
                }
                Err(error) => append_startup_log(&error.to_string()),
            }
        }

        append_startup_log(&format!(
            "no translation table found in {} for locale {locale}; using source phrases",
            dir.display()
        ));
        Self::default()
    }

    pub(crate) fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    pub(crate) fn i18n<'a>(&'a self, phrase: &'a str) -> &'a str {
        self.phrases
            .get(phrase)
            .map(String::as_str)
            .unwrap_or(phrase)
    }
}

fn read_phrase_table(path: &Path) -> Result<HashMap<String, String>, TranslationError> {
    let raw = fs::read_to_string(path).map_err(|source| TranslationError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| TranslationError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn locale_candidates(locale: &str) -> Vec<String> {
    let mut candidates = Vec::with_capacity(3);
    if let Some(normalized) = normalize_locale(locale) {
        if let Some((language, _)) = normalized.split_once('-') {
            let language = language.to_string();
            candidates.push(normalized);
            candidates.push(language);
        } else {
            candidates.push(normalized);
        }
    }
    if !candidates.iter().any(|candidate| candidate == DEFAULT_LOCALE) {
        candidates.push(DEFAULT_LOCALE.to_string());
    }
    candidates
}

/// `pt_BR.UTF-8` → `pt-BR`, `EN` → `en`. `C`/`POSIX` carry no language.
pub(crate) fn normalize_locale(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let raw = raw.split(['.', '@']).next().unwrap_or_default();
    if raw.is_empty() || raw.eq_ignore_ascii_case("c") || raw.eq_ignore_ascii_case("posix") {
        return None;
    }
    if !raw
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-')
    {
        return None;
    }

    let mut parts = raw.split(['_', '-']).filter(|part| !part.is_empty());
    let language = parts.next()?.to_ascii_lowercase();
    match parts.next() {
        Some(region) => Some(format!("{language}-{}", region.to_ascii_uppercase())),
        None => Some(language),
    }
}

pub(crate) fn resolve_locale() -> String {
    for env_key in [LOCALE_ENV, "LC_ALL", "LC_MESSAGES", "LANG"] {
        if let Ok(value) = env::var(env_key) {
            if let Some(locale) = normalize_locale(&value) {
                return locale;
            }
        }
    }

    DEFAULT_LOCALE.to_string()
}

pub(crate) fn translations_dir_override() -> Option<PathBuf> {
    let value = env::var(TRANSLATIONS_DIR_ENV).ok()?;
    let path = PathBuf::from(value.trim());
    (!path.as_os_str().is_empty()).then_some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_table(dir: &Path, locale: &str, body: &str) {
        fs::write(dir.join(format!("{locale}.json")), body).expect("write translation table");
    }

    #[test]
    fn normalize_locale_handles_posix_forms() {
        assert_eq!(normalize_locale("pt_BR.UTF-8"), Some("pt-BR".to_string()));
        assert_eq!(normalize_locale("de_DE@euro"), Some("de-DE".to_string()));
        assert_eq!(normalize_locale("EN"), Some("en".to_string()));
        assert_eq!(normalize_locale("zh-cn"), Some("zh-CN".to_string()));
        assert_eq!(normalize_locale("C"), None);
        assert_eq!(normalize_locale("POSIX"), None);
        assert_eq!(normalize_locale("  "), None);
        assert_eq!(normalize_locale("../etc"), None);
    }

    #[test]
    fn locale_candidates_try_region_then_language_then_default() {
        assert_eq!(locale_candidates("pt_BR"), vec!["pt-BR", "pt", "en"]);
        assert_eq!(locale_candidates("fr"), vec!["fr", "en"]);
        assert_eq!(locale_candidates("en-US"), vec!["en-US", "en"]);
        assert_eq!(locale_candidates(""), vec!["en"]);
    }

    #[test]
    fn load_uses_matching_locale_table() {
        let temp = tempfile::tempdir().expect("create temp dir");
        write_table(temp.path(), "en", r#"{"Quit": "Quit"}"#);
        write_table(temp.path(), "fr", r#"{"Quit": "Quitter"}"#);

        let translations = Translations::load(temp.path(), "fr");
        assert_eq!(translations.locale(), Some("fr"));
        assert_eq!(translations.i18n("Quit"), "Quitter");
    }

    #[test]
    fn load_falls_back_to_language_table() {
        let temp = tempfile::tempdir().expect("create temp dir");
        write_table(temp.path(), "en", r#"{"Later": "Later"}"#);
        write_table(temp.path(), "es", r#"{"Later": "Más tarde"}"#);

        let translations = Translations::load(temp.path(), "es_MX.UTF-8");
        assert_eq!(translations.locale(), Some("es"));
        assert_eq!(translations.i18n("Later"), "Más tarde");
    }

    #[test]
    fn load_falls_back_to_english_when_locale_is_missing() {
        let temp = tempfile::tempdir().expect("create temp dir");
        write_table(temp.path(), "en", r#"{"Open app": "Open the app"}"#);

        let translations = Translations::load(temp.path(), "ja");
        assert_eq!(translations.locale(), Some("en"));
        assert_eq!(translations.i18n("Open app"), "Open the app");
    }

    #[test]
    fn load_skips_malformed_table() {
        let temp = tempfile::tempdir().expect("create temp dir");
        write_table(temp.path(), "de", "{ not json");
        write_table(temp.path(), "en", r#"{"No": "Nope"}"#);

        let translations = Translations::load(temp.path(), "de");
        assert_eq!(translations.locale(), Some("en"));
        assert_eq!(translations.i18n("No"), "Nope");
    }

    #[test]
    fn i18n_returns_input_for_unknown_phrase() {
        let temp = tempfile::tempdir().expect("create temp dir");
        write_table(temp.path(), "fr", r#"{"Quit": "Quitter"}"#);

        let translations = Translations::load(temp.path(), "fr");
        assert_eq!(translations.i18n("Paste video link"), "Paste video link");
    }

    #[test]
    fn load_without_any_table_is_identity() {
        let temp = tempfile::tempdir().expect("create temp dir");

        let translations = Translations::load(temp.path(), "fr");
        assert_eq!(translations.locale(), None);
        assert_eq!(translations.i18n("Restart"), "Restart");
    }
}
