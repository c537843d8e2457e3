//! Generic resource actor used by every catalog in the store.
//!
//! A catalog (products, suppliers) is an [`ActorEntity`] held by a
//! [`ResourceActor`] that owns the records and processes requests one at a
//! time. Callers talk to it through a cloneable [`ResourceClient`].
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait a record type implements to be managed by an actor
//! - [`ResourceActor`] - Owns the records and runs the message loop
//! - [`ResourceClient`] - Typed sender half used by the domain clients
//! - [`FrameworkError`] - Channel failures and wrapped entity errors
//!
//! # Testing
//!
//! See [`mock`] for a client double that answers from scripted expectations.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
