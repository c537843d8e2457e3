//! # Branch Actor
//!
//! Registry of the chain's outlets. Unlike suppliers, branches can be
//! deleted outright; [`BranchAction::ToggleStatus`] closes one temporarily.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Branch;

/// Creates a new branch actor and its client.
pub fn new() -> (ResourceActor<Branch>, ResourceClient<Branch>) {
    ResourceActor::new(32)
}
