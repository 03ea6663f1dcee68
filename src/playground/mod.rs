//! Interactive button playground: preview, variant matrix, and generated
//! markup, driven by explicit controls.

pub mod controls;
pub mod markup;
pub mod state;

pub use controls::{Control, ControlChange, ControlId, ControlKind};
pub use markup::button_markup;
pub use state::{Playground, PlaygroundError, Preview, Tab, COPIED_MESSAGE, DEFAULT_COPY_NOTICE};
