//! Text rendering helpers for snapshot tests.
//!
//! Use [`button_matrix_to_string`] and [`text_field_matrix_to_string`] to
//! capture an enumerated matrix as an aligned plain-text table.

pub mod snapshot;

pub use snapshot::{button_matrix_to_string, table_to_string, text_field_matrix_to_string};
