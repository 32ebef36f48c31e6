//! Store operations
//!
//! Pure functions from one snapshot to the next. Each one runs all of its
//! precondition checks before touching the copy it returns, so an `Err`
//! never carries a half-applied change.

mod create;
mod relocate;
mod selection;

pub use create::create_item;
pub use relocate::move_item;
pub use selection::{set_drag_item, set_opened_folder};
