//! Playground state: the selected tab, the button being edited, the matrix
//! and the copy notice.
//!
//! All state lives in [`Playground`] and is passed to whoever renders it.
//! Time never advances on its own: callers hand in the current [`Instant`].

use std::time::{Duration, Instant};

use crate::components::{
    button_affordances, resolve_button_style, ButtonAffordances, ButtonVariantFlags,
};
use crate::matrix::{enumerate_button_matrix, ButtonMatrixRow};
use crate::playground::controls::{controls, Control, ControlChange, ControlId};
use crate::playground::markup::button_markup;
use crate::style::StyleDescriptor;

/// How long the copy notice stays up by default.
pub const DEFAULT_COPY_NOTICE: Duration = Duration::from_millis(1200);

/// Message raised after the markup is copied.
pub const COPIED_MESSAGE: &str = "Copied!";

/// Errors from editing the playground.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaygroundError {
    #[error("control '{control}' is disabled")]
    ControlDisabled { control: ControlId },
}

// ---------------------------------------------------------------------------
// Tab
// ---------------------------------------------------------------------------

/// Playground tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Preview,
    Matrix,
    Code,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Preview, Tab::Matrix, Tab::Code];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Preview => "Preview",
            Tab::Matrix => "Matrix",
            Tab::Code => "Show Code",
        }
    }
}

// ---------------------------------------------------------------------------
// Preview
// ---------------------------------------------------------------------------

/// Everything needed to draw the single-instance preview.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub flags: ButtonVariantFlags,
    pub style: StyleDescriptor,
    pub affordances: ButtonAffordances,
}

#[derive(Debug, Clone, Copy)]
struct CopyNotice {
    message: &'static str,
    expires_at: Instant,
}

// ---------------------------------------------------------------------------
// Playground
// ---------------------------------------------------------------------------

/// Interactive button playground.
///
/// # Examples
///
/// ```
/// use variant_showcase::components::Hierarchy;
/// use variant_showcase::playground::{ControlChange, Playground, Tab};
///
/// let mut playground = Playground::default();
/// playground.apply(ControlChange::Hierarchy(Hierarchy::Secondary)).unwrap();
/// playground.select_tab(Tab::Code);
/// assert!(playground.code().contains("hierarchy=\"Secondary\""));
/// ```
#[derive(Debug, Clone)]
pub struct Playground {
    flags: ButtonVariantFlags,
    tab: Tab,
    matrix: Vec<ButtonMatrixRow>,
    notice: Option<CopyNotice>,
    notice_duration: Duration,
}

impl Default for Playground {
    fn default() -> Self {
        Self::new(ButtonVariantFlags::default(), DEFAULT_COPY_NOTICE)
    }
}

impl Playground {
    /// Mount a playground. The matrix is enumerated here, once.
    ///
    /// Flags with both `danger` and `success` set would lock both controls,
    /// so `success` is cleared; danger is what the resolver shows anyway.
    pub fn new(mut flags: ButtonVariantFlags, notice_duration: Duration) -> Self {
        if flags.danger && flags.success {
            log::warn!("initial button sets both danger and success; clearing success");
            flags.success = false;
        }
        Self {
            flags,
            tab: Tab::default(),
            matrix: enumerate_button_matrix(),
            notice: None,
            notice_duration,
        }
    }

    /// The flags currently being edited.
    pub fn flags(&self) -> &ButtonVariantFlags {
        &self.flags
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        log::trace!("playground tab -> {}", tab.title());
        self.tab = tab;
    }

    /// Apply an edit made through a control.
    ///
    /// Edits to a disabled control are rejected and leave the flags as they
    /// were.
    pub fn apply(&mut self, change: ControlChange) -> Result<(), PlaygroundError> {
        let control = change.control();
        if !control.is_enabled(&self.flags) {
            return Err(PlaygroundError::ControlDisabled { control });
        }
        log::trace!("playground control {control} changed: {change:?}");
        change.write_to(&mut self.flags);
        Ok(())
    }

    /// The controls table for the current flags.
    pub fn controls(&self) -> Vec<Control> {
        controls(&self.flags)
    }

    /// The live preview, resolved with the same resolver as the matrix.
    pub fn preview(&self) -> Preview {
        Preview {
            flags: self.flags.clone(),
            style: resolve_button_style(&self.flags),
            affordances: button_affordances(&self.flags),
        }
    }

    /// The variant matrix enumerated at mount.
    pub fn matrix(&self) -> &[ButtonMatrixRow] {
        &self.matrix
    }

    /// Markup for the current flags.
    pub fn code(&self) -> String {
        button_markup(&self.flags)
    }

    /// Return the markup for the caller to place on the clipboard, and raise
    /// the copy notice until `now` plus the notice duration.
    pub fn copy_code(&mut self, now: Instant) -> String {
        self.notice = Some(CopyNotice {
            message: COPIED_MESSAGE,
            expires_at: now + self.notice_duration,
        });
        self.code()
    }

    /// The copy notice, if it is still up at `now`.
    pub fn copy_notice(&self, now: Instant) -> Option<&'static str> {
        self.notice
            .filter(|notice| now < notice.expires_at)
            .map(|notice| notice.message)
    }
}
