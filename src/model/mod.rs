//! Domain model types (pure).

pub mod catalogue;
pub mod error;
pub mod key_action;
pub mod menu;

// Re-export for convenience
pub use catalogue::Catalogue;
pub use error::{CatalogueError, ContextError};
pub use key_action::KeyAction;
pub use menu::{Align, InvalidAlign, MenuItem};
