//! # The Entity Contract
//!
//! [`ActorEntity`] is what a record type implements so a
//! [`ResourceActor`](crate::framework::ResourceActor) can own it. The
//! associated types pin the payload of every request to the record it targets:
//! a `SupplierCreate` can never reach the product catalog.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A record managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// Ids are allocated by the actor from a `u32` counter starting at 1, and are
/// ordered so that listing returns records in creation order.
///
/// # Async & Context
/// Hooks are async and receive the `Context` passed to `run()`, which lets a
/// record call other actors after every actor has been constructed.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Unique identifier, built from the actor's counter.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u32> + 'static;

    /// Payload used to create a record.
    type Create: Send + Sync + Debug + 'static;

    /// Payload used to modify a record.
    type Update: Send + Sync + Debug + 'static;

    /// Record-specific operations beyond CRUD (e.g. `ReserveStock`).
    type Action: Send + Sync + Debug + 'static;

    /// Value returned by an [`Action`](Self::Action).
    type ActionResult: Send + Sync + Debug + 'static;

    /// Dependencies injected at `run()` time. Use `()` when there are none.
    type Context: Send + Sync;

    /// Domain error returned by the hooks.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the record from its freshly allocated id and the create payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Runs after construction, before the record is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Runs before removal. An error keeps the record in place.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
