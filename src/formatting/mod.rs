//! Turning classified spans into highlighted output

mod markup;
mod renderer;
mod syntax;

// Re-export all public symbols
pub use markup::*;
pub use renderer::*;
pub use syntax::*;
