//! Outbound Calls
//!
//! Network requests the board makes, behind small traits so the
//! board logic can be driven without a browser.

mod sum;

pub use sum::*;
