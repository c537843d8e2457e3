//! Plain records managed by the catalog actors.

pub mod branch;
pub mod product;
pub mod supplier;

pub use branch::*;
pub use product::*;
pub use supplier::*;
