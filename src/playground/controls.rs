//! Playground controls: the editable rows of the preview tab.
//!
//! Each control edits one field of [`ButtonVariantFlags`]. Some controls are
//! disabled depending on the others: `danger` and `success` lock each other
//! out, and an icon-only button has no label or dropdown to edit.

use std::fmt;

use crate::components::{ButtonState, ButtonVariantFlags, Hierarchy};

/// Identifies one playground control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    Hierarchy,
    State,
    IconOnly,
    Alternative,
    Danger,
    Success,
    ShowDropdown,
    Label,
}

impl ControlId {
    /// All controls, in display order.
    pub const ALL: [ControlId; 8] = [
        ControlId::Hierarchy,
        ControlId::State,
        ControlId::IconOnly,
        ControlId::Alternative,
        ControlId::Danger,
        ControlId::Success,
        ControlId::ShowDropdown,
        ControlId::Label,
    ];

    /// Name shown in the controls table; matches the markup attribute.
    pub fn name(self) -> &'static str {
        match self {
            ControlId::Hierarchy => "hierarchy",
            ControlId::State => "state",
            ControlId::IconOnly => "iconOnly",
            ControlId::Alternative => "alternative",
            ControlId::Danger => "danger",
            ControlId::Success => "success",
            ControlId::ShowDropdown => "showDropdown",
            ControlId::Label => "label",
        }
    }

    /// Whether this control accepts edits given the current flags.
    pub fn is_enabled(self, flags: &ButtonVariantFlags) -> bool {
        match self {
            ControlId::Danger => !flags.success,
            ControlId::Success => !flags.danger,
            ControlId::ShowDropdown | ControlId::Label => !flags.icon_only,
            ControlId::Hierarchy | ControlId::State | ControlId::IconOnly | ControlId::Alternative => {
                true
            }
        }
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An edit made through a control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlChange {
    Hierarchy(Hierarchy),
    State(ButtonState),
    IconOnly(bool),
    Alternative(bool),
    Danger(bool),
    Success(bool),
    ShowDropdown(bool),
    Label(String),
}

impl ControlChange {
    /// The control this change is made through.
    pub fn control(&self) -> ControlId {
        match self {
            ControlChange::Hierarchy(_) => ControlId::Hierarchy,
            ControlChange::State(_) => ControlId::State,
            ControlChange::IconOnly(_) => ControlId::IconOnly,
            ControlChange::Alternative(_) => ControlId::Alternative,
            ControlChange::Danger(_) => ControlId::Danger,
            ControlChange::Success(_) => ControlId::Success,
            ControlChange::ShowDropdown(_) => ControlId::ShowDropdown,
            ControlChange::Label(_) => ControlId::Label,
        }
    }

    /// Write the change into `flags`. Does not check enablement.
    pub(crate) fn write_to(self, flags: &mut ButtonVariantFlags) {
        match self {
            ControlChange::Hierarchy(h) => flags.hierarchy = h,
            ControlChange::State(s) => flags.state = s,
            ControlChange::IconOnly(v) => flags.icon_only = v,
            ControlChange::Alternative(v) => flags.alternative = v,
            ControlChange::Danger(v) => flags.danger = v,
            ControlChange::Success(v) => flags.success = v,
            ControlChange::ShowDropdown(v) => flags.show_dropdown = v,
            ControlChange::Label(label) => flags.label = label,
        }
    }
}

/// The input widget a control is shown as, with its current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlKind {
    Radio {
        options: Vec<&'static str>,
        selected: &'static str,
    },
    Checkbox {
        checked: bool,
    },
    Text {
        value: String,
    },
}

/// One row of the controls table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub id: ControlId,
    pub kind: ControlKind,
    pub enabled: bool,
}

impl Control {
    pub fn name(&self) -> &'static str {
        self.id.name()
    }
}

/// Build the controls table for the given flags.
pub fn controls(flags: &ButtonVariantFlags) -> Vec<Control> {
    ControlId::ALL
        .into_iter()
        .map(|id| {
            let kind = match id {
                ControlId::Hierarchy => ControlKind::Radio {
                    options: Hierarchy::ALL.map(Hierarchy::as_str).to_vec(),
                    selected: flags.hierarchy.as_str(),
                },
                ControlId::State => ControlKind::Radio {
                    options: ButtonState::ALL.map(ButtonState::as_str).to_vec(),
                    selected: flags.state.as_str(),
                },
                ControlId::IconOnly => ControlKind::Checkbox { checked: flags.icon_only },
                ControlId::Alternative => ControlKind::Checkbox { checked: flags.alternative },
                ControlId::Danger => ControlKind::Checkbox { checked: flags.danger },
                ControlId::Success => ControlKind::Checkbox { checked: flags.success },
                ControlId::ShowDropdown => ControlKind::Checkbox { checked: flags.show_dropdown },
                ControlId::Label => ControlKind::Text { value: flags.label.clone() },
            };
            Control {
                id,
                kind,
                enabled: id.is_enabled(flags),
            }
        })
        .collect()
}
