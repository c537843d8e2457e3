//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod branch_client;
pub mod inventory_client;
pub mod supplier_client;

pub use actor_client::*;
pub use branch_client::*;
pub use inventory_client::*;
pub use supplier_client::*;
