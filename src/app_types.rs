use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};
use tauri::menu::Menu;

use crate::page_paths;

#[derive(Clone)]
pub(crate) struct TrayMenuState {
    pub(crate) menu: Menu<tauri::Wry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TrayEnableOutcome {
    Create,
    Reactivate,
    AlreadyActive,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TrayActivation {
    created: bool,
    active: bool,
}

impl TrayActivation {
    pub(crate) fn enable(&mut self) -> TrayEnableOutcome {
        match (self.created, self.active) {
            (true, true) => TrayEnableOutcome::AlreadyActive,
            (true, false) => {
                self.active = true;
                TrayEnableOutcome::Reactivate
            }
            (false, _) => {
                self.created = true;
                self.active = true;
                TrayEnableOutcome::Create
            }
        }
    }

    /// Flags the tray inactive. The icon itself stays constructed.
    pub(crate) fn disable(&mut self) {
        self.active = false;
    }

    pub(crate) fn creation_failed(&mut self) {
        self.created = false;
        self.active = false;
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LinkDelivery {
    Immediate(String),
    AfterIndexReload,
    /// The index page is already reloading; the parked link was replaced.
    ReplacedParked,
}

#[derive(Debug)]
pub(crate) struct ShellState {
    quitting: AtomicBool,
    index_open: AtomicBool,
    tray: Mutex<TrayActivation>,
    pending_link: Mutex<Option<String>>,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            quitting: AtomicBool::new(false),
            index_open: AtomicBool::new(true),
            tray: Mutex::new(TrayActivation::default()),
            pending_link: Mutex::new(None),
        }
    }
}

impl ShellState {
    pub(crate) fn mark_quitting(&self) {
        self.quitting.store(true, Ordering::Relaxed);
    }

    pub(crate) fn is_quitting(&self) -> bool {
        self.quitting.load(Ordering::Relaxed)
    }

    pub(crate) fn is_index_open(&self) -> bool {
        self.index_open.load(Ordering::Relaxed)
    }

    pub(crate) fn set_index_open(&self, open: bool) {
        self.index_open.store(open, Ordering::Relaxed);
    }

    /// Records which page the primary window is about to show.
    pub(crate) fn record_navigation(&self, page: &str) {
        self.set_index_open(!page_paths::is_playlist_page(page));
    }

    pub(crate) fn enable_tray(&self) -> TrayEnableOutcome {
        match self.tray.lock() {
            Ok(mut tray) => tray.enable(),
            Err(_) => TrayEnableOutcome::AlreadyActive,
        }
    }

    pub(crate) fn disable_tray(&self) {
        if let Ok(mut tray) = self.tray.lock() {
            tray.disable();
        }
    }

    pub(crate) fn tray_creation_failed(&self) {
        if let Ok(mut tray) = self.tray.lock() {
            tray.creation_failed();
        }
    }

    pub(crate) fn is_tray_active(&self) -> bool {
        self.tray.lock().map(|tray| tray.is_active()).unwrap_or(false)
    }

    /// Either hands the link back for immediate delivery or parks it until
    /// the index page reports it is ready. A newer paste replaces a parked one.
    pub(crate) fn paste_link(&self, text: String) -> LinkDelivery {
        let Ok(mut pending) = self.pending_link.lock() else {
            return LinkDelivery::Immediate(text);
        };

        if pending.is_some() {
            *pending = Some(text);
            return LinkDelivery::ReplacedParked;
        }
        if self.is_index_open() {
            return LinkDelivery::Immediate(text);
        }

        *pending = Some(text);
        self.set_index_open(true);
        LinkDelivery::AfterIndexReload
    }

    pub(crate) fn take_pending_link(&self) -> Option<String> {
        self.pending_link
            .lock()
            .ok()
            .and_then(|mut pending| pending.take())
    }
}
