//! Showcase components: Button and TextField variants with their resolvers.

pub mod button;
pub mod text_field;

pub use button::{
    button_affordances, resolve_button_style, ButtonAffordances, ButtonState, ButtonVariantFlags,
    Hierarchy,
};
pub use text_field::{resolve_text_field_style, TextFieldState, TextFieldStyle, TextFieldVariantFlags};

/// Errors from parsing variant names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VariantParseError {
    #[error("unknown button hierarchy: {0}")]
    UnknownHierarchy(String),
    #[error("unknown button state: {0}")]
    UnknownButtonState(String),
    #[error("unknown text field state: {0}")]
    UnknownTextFieldState(String),
    #[error("unknown component kind: {0}")]
    UnknownComponentKind(String),
}
