use std::{sync::Mutex, time::Instant};

use tauri::{AppHandle, Manager};
use tauri_plugin_dialog::{DialogExt, MessageDialogButtons, MessageDialogKind};
use tauri_plugin_updater::{Update, UpdaterExt};

use crate::{append_update_log, external_url, Translations, MACOS_RELEASE_DOWNLOAD_URL};

const UPDATE_AVAILABLE_TITLE: &str = "Update Available";
const UPDATE_READY_TITLE: &str = "Update Ready";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UpdatePlatform {
    MacOs,
    Windows,
    Linux,
}

impl UpdatePlatform {
    pub(crate) fn current() -> Self {
        if cfg!(target_os = "macos") {
            UpdatePlatform::MacOs
        } else if cfg!(target_os = "windows") {
            UpdatePlatform::Windows
        } else {
            UpdatePlatform::Linux
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AvailableAction {
    OpenReleasePage,
    Download,
    Defer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DownloadedAction {
    InstallNow,
    InstallOnQuit,
}

pub(crate) fn decide_on_available(platform: UpdatePlatform, accepted: bool) -> AvailableAction {
    match (accepted, platform) {
        (false, _) => AvailableAction::Defer,
        (true, UpdatePlatform::MacOs) => AvailableAction::OpenReleasePage,
        (true, _) => AvailableAction::Download,
    }
}

pub(crate) fn decide_on_downloaded(accepted: bool) -> DownloadedAction {
    if accepted {
        DownloadedAction::InstallNow
    } else {
        DownloadedAction::InstallOnQuit
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PromptText {
    pub(crate) message: &'static str,
    pub(crate) accept: &'static str,
    pub(crate) decline: &'static str,
}

pub(crate) fn available_prompt(platform: UpdatePlatform) -> PromptText {
    match platform {
        UpdatePlatform::MacOs => PromptText {
            message: "A new version is available, do you want to download it?",
            accept: "Download",
            decline: "No",
        },
        UpdatePlatform::Windows | UpdatePlatform::Linux => PromptText {
            message: "A new version is available, do you want to update?",
            accept: "Update",
            decline: "No",
        },
    }
}

pub(crate) const DOWNLOADED_PROMPT: PromptText = PromptText {
    message: "Install and restart now?",
    accept: "Restart",
    decline: "Later",
};

/// Windows shows the release notes under the question, other platforms the
/// release version.
pub(crate) fn available_detail(
    platform: UpdatePlatform,
    version: &str,
    notes: Option<&str>,
) -> String {
    match (platform, notes.map(str::trim)) {
        (UpdatePlatform::Windows, Some(notes)) if !notes.is_empty() => notes.to_string(),
        _ => version.to_string(),
    }
}

pub(crate) fn prompt_message(message: &str, detail: Option<&str>) -> String {
    match detail.map(str::trim).filter(|detail| !detail.is_empty()) {
        Some(detail) => format!("{message}\n\n{detail}"),
        None => message.to_string(),
    }
}

/// Holds a downloaded update until the process exits.
#[derive(Debug)]
pub(crate) struct InstallSlot<T> {
    pending: Mutex<Option<T>>,
}

impl<T> Default for InstallSlot<T> {
    fn default() -> Self {
        Self {
            pending: Mutex::new(None),
        }
    }
}

impl<T> InstallSlot<T> {
    pub(crate) fn schedule(&self, value: T) {
        if let Ok(mut pending) = self.pending.lock() {
            *pending = Some(value);
        }
    }

    pub(crate) fn take(&self) -> Option<T> {
        self.pending.lock().ok().and_then(|mut pending| pending.take())
    }
}

pub(crate) struct PendingInstall {
    update: Update,
    bytes: Vec<u8>,
}

pub(crate) type UpdateState = InstallSlot<PendingInstall>;

fn confirm(app_handle: &AppHandle, title: &str, prompt: PromptText, detail: Option<&str>) -> bool {
    let translations = app_handle.state::<Translations>();
    app_handle
        .dialog()
        .message(prompt_message(translations.i18n(prompt.message), detail))
        .title(title)
        .kind(MessageDialogKind::Info)
        .buttons(MessageDialogButtons::OkCancelCustom(
            translations.i18n(prompt.accept).to_string(),
            translations.i18n(prompt.decline).to_string(),
        ))
        .blocking_show()
}

pub(crate) fn spawn_update_check(app_handle: AppHandle) {
    tauri::async_runtime::spawn(async move {
        run_update_check(app_handle).await;
    });
}

async fn run_update_check(app_handle: AppHandle) {
    let current_version = app_handle.package_info().version.to_string();
    let updater = match app_handle.updater() {
        Ok(updater) => updater,
        Err(error) => {
            append_update_log(&format!("failed to initialize updater: {error}"));
            return;
        }
    };

    let check_started = Instant::now();
    match updater.check().await {
        Ok(Some(update)) => {
            append_update_log(&format!(
                "update available: current_version={} latest_version={} elapsed_ms={}",
                current_version,
                update.version,
                check_started.elapsed().as_millis()
            ));
            handle_update_available(&app_handle, update).await;
        }
        Ok(None) => append_update_log(&format!(
            "no update available: current_version={} elapsed_ms={}",
            current_version,
            check_started.elapsed().as_millis()
        )),
        // A missing feed or no network is routine; only log it.
        Err(error) => append_update_log(&format!(
            "update check failed: current_version={} elapsed_ms={} error={}",
            current_version,
            check_started.elapsed().as_millis(),
            error
        )),
    }
}

async fn handle_update_available(app_handle: &AppHandle, update: Update) {
    let platform = UpdatePlatform::current();
    let detail = available_detail(platform, &update.version, update.body.as_deref());
    let accepted = confirm(
        app_handle,
        UPDATE_AVAILABLE_TITLE,
        available_prompt(platform),
        Some(&detail),
    );

    match decide_on_available(platform, accepted) {
        AvailableAction::Defer => {
            append_update_log(&format!("update {} deferred by user", update.version));
        }
        AvailableAction::OpenReleasePage => {
            match external_url::open_external_url(MACOS_RELEASE_DOWNLOAD_URL) {
                Ok(()) => append_update_log("opened release archive in system browser"),
                Err(error) => {
                    append_update_log(&format!("failed to open release archive: {error}"))
                }
            }
        }
        AvailableAction::Download => {
            append_update_log(&format!("downloading update {}", update.version));
            match update.download(|_, _| {}, || {}).await {
                Ok(bytes) => handle_update_downloaded(app_handle, update, bytes),
                Err(error) => append_update_log(&format!("failed to download update: {error}")),
            }
        }
    }
}

fn handle_update_downloaded(app_handle: &AppHandle, update: Update, bytes: Vec<u8>) {
    let accepted = confirm(app_handle, UPDATE_READY_TITLE, DOWNLOADED_PROMPT, None);

    match decide_on_downloaded(accepted) {
        DownloadedAction::InstallNow => {
            if let Err(error) = update.install(&bytes) {
                append_update_log(&format!("failed to install update: {error}"));
                return;
            }
            append_update_log(&format!(
                "update {} installed, restarting application",
                update.version
            ));
            app_handle.request_restart();
        }
        DownloadedAction::InstallOnQuit => {
            append_update_log(&format!(
                "update {} will be installed when the application quits",
                update.version
            ));
            app_handle
                .state::<UpdateState>()
                .schedule(PendingInstall { update, bytes });
        }
    }
}

pub(crate) fn install_pending_update(app_handle: &AppHandle) {
    let Some(pending) = app_handle
        .try_state::<UpdateState>()
        .and_then(|state| state.take())
    else {
        return;
    };

    match pending.update.install(&pending.bytes) {
        Ok(()) => append_update_log(&format!(
            "installed update {} on quit",
            pending.update.version
        )),
        Err(error) => append_update_log(&format!("failed to install update on quit: {error}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declining_available_update_defers_on_every_platform() {
        for platform in [
            UpdatePlatform::MacOs,
            UpdatePlatform::Windows,
            UpdatePlatform::Linux,
        ] {
            assert_eq!(decide_on_available(platform, false), AvailableAction::Defer);
        }
    }

    #[test]
    fn accepting_available_update_on_macos_opens_release_page() {
        assert_eq!(
            decide_on_available(UpdatePlatform::MacOs, true),
            AvailableAction::OpenReleasePage
        );
    }

    #[test]
    fn accepting_available_update_elsewhere_downloads() {
        assert_eq!(
            decide_on_available(UpdatePlatform::Windows, true),
            AvailableAction::Download
        );
        assert_eq!(
            decide_on_available(UpdatePlatform::Linux, true),
            AvailableAction::Download
        );
    }

    #[test]
    fn later_on_downloaded_update_schedules_install_on_quit() {
        assert_eq!(decide_on_downloaded(false), DownloadedAction::InstallOnQuit);
        assert_eq!(decide_on_downloaded(true), DownloadedAction::InstallNow);

        let slot: InstallSlot<&str> = InstallSlot::default();
        assert_eq!(slot.take(), None);
        slot.schedule("2.0.0");
        assert_eq!(slot.take(), Some("2.0.0"));
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn prompts_use_platform_specific_buttons() {
        assert_eq!(available_prompt(UpdatePlatform::MacOs).accept, "Download");
        assert_eq!(available_prompt(UpdatePlatform::Linux).accept, "Update");
        assert_eq!(DOWNLOADED_PROMPT.decline, "Later");
    }

    #[test]
    fn available_detail_prefers_notes_on_windows_only() {
        assert_eq!(
            available_detail(UpdatePlatform::Windows, "3.1.0", Some("Bug fixes")),
            "Bug fixes"
        );
        assert_eq!(
            available_detail(UpdatePlatform::Windows, "3.1.0", Some("  ")),
            "3.1.0"
        );
        assert_eq!(
            available_detail(UpdatePlatform::MacOs, "3.1.0", Some("Bug fixes")),
            "3.1.0"
        );
    }

    #[test]
    fn prompt_message_appends_non_empty_detail() {
        assert_eq!(prompt_message("Update?", Some("3.1.0")), "Update?\n\n3.1.0");
        assert_eq!(prompt_message("Update?", Some("")), "Update?");
        assert_eq!(prompt_message("Update?", None), "Update?");
    }
}
