//! # variant-showcase
//!
//! Design-system component showcase: a button and a text field whose styles
//! are resolved from declared variant flags against a design-token palette.
//!
//! Every resolver is a pure function over closed variant enums, and the
//! matrix enumerator runs each combination through the same resolver as the
//! single-instance preview, so the two never disagree.
//!
//! ## Core Systems
//!
//! - **[`tokens`]**: Colour tokens, palette, token-sheet tokenizer and parser
//! - **[`style`]**: Style descriptors (paint, border) handed to a renderer
//! - **[`components`]**: Button and TextField variant flags and resolvers
//! - **[`matrix`]**: Enumeration of every valid variant combination
//! - **[`playground`]**: Controls, preview, generated markup, copy notice
//! - **[`showcase`]**: Configuration tying palette and playground together
//! - **[`testing`]**: Plain-text matrix tables for snapshot tests

// Foundation
pub mod style;
pub mod tokens;

// Components
pub mod components;
pub mod matrix;

// Application
pub mod playground;
pub mod showcase;

// Test support
pub mod testing;

pub use components::{
    resolve_button_style, resolve_text_field_style, ButtonVariantFlags, TextFieldVariantFlags,
};
pub use matrix::{enumerate, enumerate_button_matrix, enumerate_text_field_matrix};
