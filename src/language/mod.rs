// Types representing ABC music notation as seen by the highlighter and the
// measure checker.

mod duration;
mod error;
mod patterns;
mod types;

// Re-export all public symbols
pub use duration::*;
pub use error::*;
pub use patterns::*;
pub use types::*;
