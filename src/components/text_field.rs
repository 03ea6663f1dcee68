//! Text field variants and their style resolution.
//!
//! Unlike the button, a text field's state rules are applied one after the
//! other onto a base style rather than picked by precedence.

use std::fmt;
use std::str::FromStr;

use crate::components::VariantParseError;
use crate::style::{BorderSpec, Paint, StyleDescriptor};
use crate::tokens::ColorToken;

// ---------------------------------------------------------------------------
// TextFieldState
// ---------------------------------------------------------------------------

/// Visual state of a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextFieldState {
    #[default]
    Default,
    Hover,
    Selected,
    Error,
    Filled,
    Success,
    Disabled,
}

impl TextFieldState {
    /// All states, in matrix order.
    pub const ALL: [TextFieldState; 7] = [
        TextFieldState::Default,
        TextFieldState::Hover,
        TextFieldState::Selected,
        TextFieldState::Error,
        TextFieldState::Filled,
        TextFieldState::Success,
        TextFieldState::Disabled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TextFieldState::Default => "Default",
            TextFieldState::Hover => "Hover",
            TextFieldState::Selected => "Selected",
            TextFieldState::Error => "Error",
            TextFieldState::Filled => "Filled",
            TextFieldState::Success => "Success",
            TextFieldState::Disabled => "Disabled",
        }
    }
}

impl fmt::Display for TextFieldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextFieldState {
    type Err = VariantParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| VariantParseError::UnknownTextFieldState(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// TextFieldVariantFlags
// ---------------------------------------------------------------------------

/// Declared variant of a text field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextFieldVariantFlags {
    pub state: TextFieldState,
    pub floating_label: bool,
    pub label: String,
    pub value: String,
    pub placeholder: String,
    pub error_message: String,
    /// Caller-requested disabled flag. `TextFieldState::Disabled` forces
    /// the effective value to `true` regardless.
    pub disabled: bool,
}

impl Default for TextFieldVariantFlags {
    fn default() -> Self {
        Self {
            state: TextFieldState::Default,
            floating_label: false,
            label: "Label".to_string(),
            value: String::new(),
            placeholder: String::new(),
            error_message: "Error message".to_string(),
            disabled: false,
        }
    }
}

impl TextFieldVariantFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(mut self, state: TextFieldState) -> Self {
        self.state = state;
        self
    }

    pub fn floating_label(mut self, floating_label: bool) -> Self {
        self.floating_label = floating_label;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = message.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

// ---------------------------------------------------------------------------
// TextFieldStyle
// ---------------------------------------------------------------------------

/// Resolved text field style.
///
/// `descriptor.foreground` is the label colour; the input text itself is
/// always drawn in [`text`](Self::text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextFieldStyle {
    pub descriptor: StyleDescriptor,
    pub text: ColorToken,
    pub error_text: ColorToken,
    pub show_error: bool,
    pub show_error_icon: bool,
    pub show_success: bool,
    pub show_check_icon: bool,
    /// Label sits raised above the input instead of inside it.
    pub show_floating_label: bool,
    /// Placeholder text is only shown when there is no floating label.
    pub show_placeholder: bool,
    /// Effective disabled flag.
    pub disabled: bool,
}

/// Resolve a text field's style from its variant flags.
pub fn resolve_text_field_style(flags: &TextFieldVariantFlags) -> TextFieldStyle {
    use ColorToken::*;

    let mut border = TextFieldBorder;
    let mut label = TextFieldLabel;
    let mut background = TextFieldBg;
    let mut show_error = false;
    let mut show_error_icon = false;
    let mut show_success = false;
    let mut show_check_icon = false;
    let mut disabled = flags.disabled;

    match flags.state {
        TextFieldState::Default => {}
        TextFieldState::Hover => border = TextFieldBorderHover,
        TextFieldState::Selected => {
            border = TextFieldBorderSelected;
            label = TextFieldLabelSelected;
        }
        TextFieldState::Error => {
            border = TextFieldBorderError;
            label = TextFieldLabelError;
            show_error = true;
            show_error_icon = true;
        }
        TextFieldState::Success => {
            border = TextFieldBorderSuccess;
            label = TextFieldLabelSuccess;
            show_success = true;
            show_check_icon = true;
        }
        TextFieldState::Disabled => {
            border = TextFieldBorderDisabled;
            background = TextFieldBgDisabled;
            disabled = true;
        }
        // Has content but no other state: base border, kept distinct from Default.
        TextFieldState::Filled => border = TextFieldBorder,
    }

    let show_floating_label =
        flags.floating_label && (flags.state != TextFieldState::Default || !flags.value.is_empty());

    TextFieldStyle {
        descriptor: StyleDescriptor::new(Paint::Token(background), label, BorderSpec::solid(1, border)),
        text: TextFieldText,
        error_text: TextFieldErrorText,
        show_error,
        show_error_icon,
        show_success,
        show_check_icon,
        show_floating_label,
        show_placeholder: !flags.floating_label,
        disabled,
    }
}
