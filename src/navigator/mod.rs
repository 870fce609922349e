//! Step navigation.
//!
//! The navigator owns the active step index and nothing else. Forward moves
//! are gated on partial validation of the active step's fields; backward
//! moves and jumps are not.

mod advance;
mod machine;

pub use advance::{AdvanceOutcome, AdvanceRequest, NavigationError};
pub use machine::Navigator;
