//! Variant matrix: every valid combination of a component's variant flags.
//!
//! Rows are produced in a fixed nested order so that two enumerations are
//! always identical. Each row carries the style produced by the same
//! resolver the single-instance preview uses.

use std::fmt;
use std::str::FromStr;

use crate::components::{
    resolve_button_style, resolve_text_field_style, ButtonState, ButtonVariantFlags, Hierarchy,
    TextFieldState, TextFieldStyle, TextFieldVariantFlags, VariantParseError,
};
use crate::style::StyleDescriptor;

/// Label shown on icon-only matrix rows.
pub const ICON_ONLY_LABEL: &str = "Info";
/// Label shown on text matrix rows.
pub const TEXT_LABEL: &str = "Button";

/// Column headers for the button matrix table.
pub const BUTTON_MATRIX_HEADERS: [&str; 6] =
    ["Hierarchy", "State", "Icon Only", "Alternative", "Danger", "Success"];

// ---------------------------------------------------------------------------
// ComponentKind
// ---------------------------------------------------------------------------

/// Which component a matrix enumerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Button,
    TextField,
}

impl ComponentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentKind::Button => "Button",
            ComponentKind::TextField => "TextField",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = VariantParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Button" => Ok(ComponentKind::Button),
            "TextField" => Ok(ComponentKind::TextField),
            other => Err(VariantParseError::UnknownComponentKind(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

/// One matrix entry: a flags record and the style resolved from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixRow<F, S> {
    pub flags: F,
    pub style: S,
}

pub type ButtonMatrixRow = MatrixRow<ButtonVariantFlags, StyleDescriptor>;
pub type TextFieldMatrixRow = MatrixRow<TextFieldVariantFlags, TextFieldStyle>;

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

impl MatrixRow<ButtonVariantFlags, StyleDescriptor> {
    /// Table cells in [`BUTTON_MATRIX_HEADERS`] order.
    pub fn cells(&self) -> [&'static str; 6] {
        let f = &self.flags;
        [
            f.hierarchy.as_str(),
            f.state.as_str(),
            yes_no(f.icon_only),
            yes_no(f.alternative),
            yes_no(f.danger),
            yes_no(f.success),
        ]
    }
}

/// An enumerated matrix for one component kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matrix {
    Button(Vec<ButtonMatrixRow>),
    TextField(Vec<TextFieldMatrixRow>),
}

impl Matrix {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Matrix::Button(_) => ComponentKind::Button,
            Matrix::TextField(_) => ComponentKind::TextField,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Matrix::Button(rows) => rows.len(),
            Matrix::TextField(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// Enumeration
// ---------------------------------------------------------------------------

/// Enumerate the matrix for a component kind.
pub fn enumerate(kind: ComponentKind) -> Matrix {
    match kind {
        ComponentKind::Button => Matrix::Button(enumerate_button_matrix()),
        ComponentKind::TextField => Matrix::TextField(enumerate_text_field_matrix()),
    }
}

/// Every valid button variant.
///
/// Order: hierarchy, state, icon-only, alternative, danger, success, each
/// axis in declaration order with `false` before `true`. Rows with both
/// `danger` and `success` are skipped, leaving 180 rows.
///
/// Each row's label and dropdown are overridden for display after its style
/// is resolved: icon-only rows read `"Info"` and never show a dropdown.
pub fn enumerate_button_matrix() -> Vec<ButtonMatrixRow> {
    const BOOLS: [bool; 2] = [false, true];

    let mut rows = Vec::with_capacity(180);
    for hierarchy in Hierarchy::ALL {
        for state in ButtonState::ALL {
            for icon_only in BOOLS {
                for alternative in BOOLS {
                    for danger in BOOLS {
                        for success in BOOLS {
                            if danger && success {
                                continue;
                            }
                            let mut flags = ButtonVariantFlags::new()
                                .with_hierarchy(hierarchy)
                                .with_state(state)
                                .icon_only(icon_only)
                                .alternative(alternative)
                                .danger(danger)
                                .success(success);
                            let style = resolve_button_style(&flags);

                            let label = if icon_only { ICON_ONLY_LABEL } else { TEXT_LABEL };
                            flags.label = label.to_string();
                            flags.show_dropdown = !icon_only;

                            rows.push(MatrixRow { flags, style });
                        }
                    }
                }
            }
        }
    }

    log::debug!("enumerated {} button matrix rows", rows.len());
    rows
}

/// Every text field state, each without and with a floating label: 14 rows.
pub fn enumerate_text_field_matrix() -> Vec<TextFieldMatrixRow> {
    let rows: Vec<_> = TextFieldState::ALL
        .into_iter()
        .flat_map(|state| {
            [false, true].into_iter().map(move |floating_label| {
                let flags = TextFieldVariantFlags::new()
                    .with_state(state)
                    .floating_label(floating_label);
                let style = resolve_text_field_style(&flags);
                MatrixRow { flags, style }
            })
        })
        .collect();

    log::debug!("enumerated {} text field matrix rows", rows.len());
    rows
}
