//! TUI view routing.

use std::fmt;
use std::str::FromStr;

use crate::core::{Error, Result};

/// A page of the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    /// Landing page with examples and features.
    #[default]
    Home,
    /// Prompt editor and results.
    Generate,
    /// Gallery of everything generated this session.
    History,
    /// Profile stats and details.
    Profile,
    /// Display-only preferences.
    Settings,
}

/// Session data a view reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReads {
    pub prompt_draft: bool,
    pub is_generating: bool,
    pub history: bool,
}

impl View {
    /// All views in navigation order.
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Generate,
        Self::History,
        Self::Profile,
        Self::Settings,
    ];

    /// Stable tab identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Generate => "generate",
            Self::History => "history",
            Self::Profile => "profile",
            Self::Settings => "settings",
        }
    }

    /// Navigation label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Generate => "Generator",
            Self::History => "History",
            Self::Profile => "Profile",
            Self::Settings => "Settings",
        }
    }

    #[must_use]
    pub const fn reads(self) -> SessionReads {
        match self {
            Self::Generate => SessionReads {
                prompt_draft: true,
                is_generating: true,
                history: true,
            },
            Self::History | Self::Profile => SessionReads {
                prompt_draft: false,
                is_generating: false,
                history: true,
            },
            Self::Home | Self::Settings => SessionReads {
                prompt_draft: false,
                is_generating: false,
                history: false,
            },
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|v| *v == self).unwrap_or(0)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for View {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|view| view.id() == s)
            .ok_or_else(|| Error::UnknownView(s.to_string()))
    }
}

/// Holds the active view. Exactly one view is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Router {
    active: View,
}

impl Router {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn active(&self) -> View {
        self.active
    }

    pub fn select(&mut self, view: View) {
        if view != self.active {
            tracing::debug!(from = %self.active, to = %view, "switching view");
        }
        self.active = view;
    }

    /// Select by tab identifier. Unknown identifiers leave the active view as is.
    pub fn select_id(&mut self, id: &str) -> Result<View> {
        match id.parse::<View>() {
            Ok(view) => {
                self.select(view);
                Ok(view)
            }
            Err(e) => {
                tracing::warn!(id = %id, active = %self.active, "ignoring unknown view");
                Err(e)
            }
        }
    }

    pub fn next(&mut self) {
        let idx = (self.active.position() + 1) % View::ALL.len();
        self.select(View::ALL[idx]);
    }

    pub fn previous(&mut self) {
        let len = View::ALL.len();
        let idx = (self.active.position() + len - 1) % len;
        self.select(View::ALL[idx]);
    }
}
