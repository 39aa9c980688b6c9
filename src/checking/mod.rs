//! Measure by measure beat counting

mod beats;
mod measures;

pub use beats::*;
pub use measures::*;
