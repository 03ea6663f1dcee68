//! Button variants and their style resolution.
//!
//! [`resolve_button_style`] maps a [`ButtonVariantFlags`] record to a
//! [`StyleDescriptor`]. The state is matched first; within a state,
//! `danger` beats `success`, which beats the hierarchy.

use std::fmt;
use std::str::FromStr;

use crate::components::VariantParseError;
use crate::style::{BorderSpec, Paint, StyleDescriptor};
use crate::tokens::ColorToken::{self, *};

// ---------------------------------------------------------------------------
// Variant axes
// ---------------------------------------------------------------------------

/// Visual weight of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Hierarchy {
    #[default]
    Primary,
    Secondary,
    Tertiary,
}

impl Hierarchy {
    /// All hierarchies, in matrix order.
    pub const ALL: [Hierarchy; 3] = [Hierarchy::Primary, Hierarchy::Secondary, Hierarchy::Tertiary];

    pub fn as_str(self) -> &'static str {
        match self {
            Hierarchy::Primary => "Primary",
            Hierarchy::Secondary => "Secondary",
            Hierarchy::Tertiary => "Tertiary",
        }
    }
}

impl fmt::Display for Hierarchy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Hierarchy {
    type Err = VariantParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|h| h.as_str() == s)
            .ok_or_else(|| VariantParseError::UnknownHierarchy(s.to_string()))
    }
}

/// Interaction state of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonState {
    #[default]
    Default,
    Hover,
    Active,
    Focus,
    Disabled,
}

impl ButtonState {
    /// All states, in matrix order.
    pub const ALL: [ButtonState; 5] = [
        ButtonState::Default,
        ButtonState::Hover,
        ButtonState::Active,
        ButtonState::Focus,
        ButtonState::Disabled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ButtonState::Default => "Default",
            ButtonState::Hover => "Hover",
            ButtonState::Active => "Active",
            ButtonState::Focus => "Focus",
            ButtonState::Disabled => "Disabled",
        }
    }
}

impl fmt::Display for ButtonState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ButtonState {
    type Err = VariantParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| VariantParseError::UnknownButtonState(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// ButtonVariantFlags
// ---------------------------------------------------------------------------

/// Declared variant of a button.
///
/// `danger` and `success` are meant to be exclusive, but nothing here
/// enforces it: when both are set the resolver picks danger.
///
/// # Examples
///
/// ```
/// use variant_showcase::components::{ButtonState, ButtonVariantFlags, Hierarchy};
///
/// let flags = ButtonVariantFlags::new()
///     .with_hierarchy(Hierarchy::Secondary)
///     .with_state(ButtonState::Hover);
/// assert_eq!(flags.label, "Button");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ButtonVariantFlags {
    pub hierarchy: Hierarchy,
    pub state: ButtonState,
    pub icon_only: bool,
    pub alternative: bool,
    pub danger: bool,
    pub success: bool,
    pub label: String,
    pub show_dropdown: bool,
}

impl Default for ButtonVariantFlags {
    fn default() -> Self {
        Self {
            hierarchy: Hierarchy::Primary,
            state: ButtonState::Default,
            icon_only: false,
            alternative: false,
            danger: false,
            success: false,
            label: "Button".to_string(),
            show_dropdown: true,
        }
    }
}

impl ButtonVariantFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hierarchy(mut self, hierarchy: Hierarchy) -> Self {
        self.hierarchy = hierarchy;
        self
    }

    pub fn with_state(mut self, state: ButtonState) -> Self {
        self.state = state;
        self
    }

    pub fn icon_only(mut self, icon_only: bool) -> Self {
        self.icon_only = icon_only;
        self
    }

    pub fn alternative(mut self, alternative: bool) -> Self {
        self.alternative = alternative;
        self
    }

    pub fn danger(mut self, danger: bool) -> Self {
        self.danger = danger;
        self
    }

    pub fn success(mut self, success: bool) -> Self {
        self.success = success;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn show_dropdown(mut self, show_dropdown: bool) -> Self {
        self.show_dropdown = show_dropdown;
        self
    }

    /// Whether the button is in the disabled state.
    pub fn is_disabled(&self) -> bool {
        self.state == ButtonState::Disabled
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

fn style(background: impl Into<Paint>, foreground: ColorToken, border: BorderSpec) -> StyleDescriptor {
    StyleDescriptor::new(background, foreground, border)
}

/// Resolve a button's style from its variant flags.
///
/// Total: every combination of flags yields a descriptor. `label`,
/// `icon_only` and `show_dropdown` do not affect colours.
pub fn resolve_button_style(flags: &ButtonVariantFlags) -> StyleDescriptor {
    use BorderSpec as B;
    use Hierarchy::*;
    use Paint::Transparent;

    let ButtonVariantFlags {
        hierarchy,
        state,
        danger,
        success,
        alternative,
        ..
    } = *flags;

    match state {
        ButtonState::Disabled => match hierarchy {
            Primary | Tertiary => style(ButtonPrimaryDisabled, ButtonDisabled, B::None),
            Secondary => style(ButtonPrimaryDisabled, ButtonDisabled, B::solid(1, ButtonDisabled)),
        },

        ButtonState::Hover if danger => style(ButtonDangerHover, ButtonOnColor, B::None),
        ButtonState::Hover if success => style(ButtonSuccessHover, ButtonOnColor, B::None),
        ButtonState::Hover => match hierarchy {
            Primary => style(ButtonPrimaryHover, ButtonOnColor, B::None),
            Secondary => style(
                ButtonSecondaryHover,
                ButtonOnColor,
                B::solid(1, ButtonSecondaryHover),
            ),
            Tertiary => style(Transparent, ButtonTertiaryHover, B::None),
        },

        // Secondary and Tertiary pair the disabled background with an active
        // foreground for the pressed look.
        ButtonState::Active if danger => style(ButtonDangerActive, ButtonOnColor, B::None),
        ButtonState::Active if success => style(ButtonSuccessActive, ButtonOnColor, B::None),
        ButtonState::Active => match hierarchy {
            Primary => style(ButtonPrimaryActive, ButtonOnColor, B::None),
            Secondary => style(
                ButtonPrimaryDisabled,
                ButtonSecondaryActive,
                B::solid(1, ButtonSecondaryActive),
            ),
            Tertiary => style(ButtonPrimaryDisabled, ButtonTertiaryActive, B::None),
        },

        ButtonState::Focus if danger => {
            style(ButtonDanger, ButtonOnColor, B::solid(2, ButtonDanger))
        }
        ButtonState::Focus if success => {
            style(ButtonSuccess, ButtonOnColor, B::solid(2, ButtonSuccess))
        }
        ButtonState::Focus => match hierarchy {
            Primary | Secondary => {
                style(ButtonPrimary, ButtonOnColor, B::solid(2, ButtonPrimary))
            }
            Tertiary => style(Transparent, ButtonTertiary, B::solid(2, ButtonTertiary)),
        },

        ButtonState::Default if danger => style(ButtonDanger, ButtonOnColor, B::None),
        ButtonState::Default if success => style(ButtonSuccess, ButtonOnColor, B::None),
        ButtonState::Default => match hierarchy {
            Primary => style(ButtonPrimary, ButtonOnColor, B::None),
            Secondary => {
                let color = if alternative { ButtonSecondaryAlt } else { ButtonPrimary };
                style(Transparent, color, B::solid(1, color))
            }
            Tertiary => {
                let color = if alternative { ButtonTertiaryAlt } else { ButtonTertiary };
                style(Transparent, color, B::None)
            }
        },
    }
}

// ---------------------------------------------------------------------------
// Affordances
// ---------------------------------------------------------------------------

/// Non-colour presentation derived from a button's flags.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonAffordances {
    /// Whether the button reacts to pointer and keyboard activation.
    pub interactive: bool,
    pub opacity: f32,
    /// `-1` removes the button from the tab order.
    pub tab_index: i8,
    /// Accessible name; set only for icon-only buttons, which have no
    /// visible label.
    pub aria_label: Option<String>,
    pub show_label: bool,
    pub show_dropdown: bool,
}

/// Derive the non-colour presentation for a button.
pub fn button_affordances(flags: &ButtonVariantFlags) -> ButtonAffordances {
    let disabled = flags.is_disabled();
    ButtonAffordances {
        interactive: !disabled,
        opacity: if disabled { 0.6 } else { 1.0 },
        tab_index: if disabled { -1 } else { 0 },
        aria_label: flags.icon_only.then(|| flags.label.clone()),
        show_label: !flags.icon_only,
        show_dropdown: flags.show_dropdown && !flags.icon_only,
    }
}

// ===========================================================================
// Tests
// ===========================================================================
