//! Whether the backdrop should be moving right now.
//!
//! Three independent inputs feed one predicate: the visitor's own toggle
//! (persisted), the OS reduced-motion preference and page visibility.

/// The visitor's persisted animation preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Toggle {
    #[default]
    On,
    Off,
}

impl Toggle {
    /// Only an explicit `"off"` disables; anything else, or nothing stored, is on.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("off") => Toggle::Off,
            _ => Toggle::On,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Toggle::On => "on",
            Toggle::Off => "off",
        }
    }

    pub fn flip(self) -> Self {
        match self {
            Toggle::On => Toggle::Off,
            Toggle::Off => Toggle::On,
        }
    }

    pub fn is_on(self) -> bool {
        self == Toggle::On
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MotionState {
    pub user: Toggle,
    pub reduced_motion: bool,
    pub tab_hidden: bool,
}

impl MotionState {
    pub fn new(user: Toggle, reduced_motion: bool, tab_hidden: bool) -> Self {
        Self {
            user,
            reduced_motion,
            tab_hidden,
        }
    }

    pub fn should_animate(&self) -> bool {
        self.user.is_on() && !self.reduced_motion && !self.tab_hidden
    }

    /// First reason the backdrop is paused, for logs.
    pub fn pause_reason(&self) -> Option<&'static str> {
        if !self.user.is_on() {
            Some("turned off")
        } else if self.reduced_motion {
            Some("reduced motion")
        } else if self.tab_hidden {
            Some("tab hidden")
        } else {
            None
        }
    }
}

/// Text for the toggle button's label.
pub fn toggle_label(animating: bool) -> &'static str {
    if animating {
        "Animation: on"
    } else {
        "Animation: off"
    }
}
