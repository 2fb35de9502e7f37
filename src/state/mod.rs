pub mod action;
pub mod machine;
pub mod model;

pub use action::{Popover, TypographyAction};
pub use machine::{reduce, TypographyEditor};
pub use model::{EditorState, PopoverStates};
