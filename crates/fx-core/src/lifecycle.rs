//! Page show/hide bookkeeping.
//!
//! The page wiring is released on `pagehide`. A page restored from the
//! back/forward cache fires `pageshow` with `persisted` set and gets wired
//! again; a fresh load's `pageshow` is ignored because start-up already ran.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageLifecycle {
    wired: bool,
}

impl PageLifecycle {
    pub fn is_wired(&self) -> bool {
        self.wired
    }

    pub fn wired(&mut self) {
        self.wired = true;
    }

    pub fn released(&mut self) {
        self.wired = false;
    }

    /// Returns true when there is wiring to release.
    pub fn on_hide(&mut self) -> bool {
        std::mem::take(&mut self.wired)
    }

    /// Returns true when the page came back from the cache unwired.
    pub fn on_show(&mut self, persisted: bool) -> bool {
        persisted && !self.wired
    }
}
