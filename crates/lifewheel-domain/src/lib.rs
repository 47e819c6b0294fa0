//! lifewheel-domain
//!
//! Pure domain models (dimension and keyword catalogs, wizard state).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod catalog;
pub mod common;
pub mod state;

pub use catalog::*;
pub use common::*;
pub use state::*;
