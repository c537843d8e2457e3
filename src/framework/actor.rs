//! # The Catalog Actor
//!
//! [`ResourceActor`] owns a catalog of records and serves requests from a
//! bounded channel. Requests are handled strictly one after another, so a
//! record hook sees a consistent catalog without any lock.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::{ResourceRequest, Response};
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Server half of a catalog: the records and the receiving end of the channel.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates the actor and the client connected to it.
    ///
    /// `buffer_size` bounds the number of queued requests.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the message loop until every client has been dropped.
    ///
    /// `context` is handed to each record hook.
    pub async fn run(mut self, context: T::Context) {
        // "Product" rather than "apotek_pos::model::product::Product"
        let entity_type = std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    self.create(entity_type, params, &context, respond_to).await;
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    self.update(entity_type, id, update, &context, respond_to)
                        .await;
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    self.delete(entity_type, id, &context, respond_to).await;
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    self.action(entity_type, id, action, &context, respond_to)
                        .await;
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(
        &mut self,
        entity_type: &str,
        params: T::Create,
        context: &T::Context,
        respond_to: Response<T::Id>,
    ) {
        let id = T::Id::from(self.next_id);

        let mut item = match T::from_create_params(id.clone(), params) {
            Ok(item) => item,
            Err(e) => {
                warn!(entity_type, error = %e, "Create failed");
                let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                return;
            }
        };
        if let Err(e) = item.on_create(context).await {
            warn!(entity_type, error = %e, "on_create failed");
            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
            return;
        }

        // Rejected creates do not consume an id.
        self.next_id += 1;
        self.store.insert(id.clone(), item);
        info!(entity_type, %id, size = self.store.len(), "Created");
        let _ = respond_to.send(Ok(id));
    }

    async fn update(
        &mut self,
        entity_type: &str,
        id: T::Id,
        update: T::Update,
        context: &T::Context,
        respond_to: Response<T>,
    ) {
        let Some(item) = self.store.get_mut(&id) else {
            warn!(entity_type, %id, "Not found");
            let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
            return;
        };

        // Hooks work on a copy so a failed update leaves the record as it was.
        let mut draft = item.clone();
        match draft.on_update(update, context).await {
            Ok(()) => {
                *item = draft.clone();
                info!(entity_type, %id, "Updated");
                let _ = respond_to.send(Ok(draft));
            }
            Err(e) => {
                warn!(entity_type, %id, error = %e, "Update failed");
                let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
            }
        }
    }

    async fn delete(
        &mut self,
        entity_type: &str,
        id: T::Id,
        context: &T::Context,
        respond_to: Response<()>,
    ) {
        let Some(item) = self.store.get(&id) else {
            warn!(entity_type, %id, "Not found");
            let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
            return;
        };
        if let Err(e) = item.on_delete(context).await {
            warn!(entity_type, %id, error = %e, "on_delete failed");
            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
            return;
        }
        self.store.remove(&id);
        info!(entity_type, %id, size = self.store.len(), "Deleted");
        let _ = respond_to.send(Ok(()));
    }

    async fn action(
        &mut self,
        entity_type: &str,
        id: T::Id,
        action: T::Action,
        context: &T::Context,
        respond_to: Response<T::ActionResult>,
    ) {
        let Some(item) = self.store.get_mut(&id) else {
            warn!(entity_type, %id, "Not found");
            let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
            return;
        };

        let mut draft = item.clone();
        let result = draft.handle_action(action, context).await;
        match result {
            Ok(value) => {
                *item = draft;
                info!(entity_type, %id, "Action ok");
                let _ = respond_to.send(Ok(value));
            }
            Err(e) => {
                warn!(entity_type, %id, error = %e, "Action failed");
                let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Shelf {
        id: u32,
        label: String,
        units: u32,
    }

    #[derive(Debug)]
    struct ShelfCreate {
        label: String,
        units: u32,
    }

    #[derive(Debug)]
    struct ShelfUpdate {
        label: Option<String>,
    }

    #[derive(Debug)]
    enum ShelfAction {
        Take(u32),
    }

    #[derive(Debug, thiserror::Error, PartialEq)]
    enum ShelfError {
        #[error("blank label")]
        BlankLabel,
        #[error("only {0} units left")]
        Short(u32),
    }

    #[async_trait]
    impl ActorEntity for Shelf {
        type Id = u32;
        type Create = ShelfCreate;
        type Update = ShelfUpdate;
        type Action = ShelfAction;
        type ActionResult = u32;
        type Context = ();
        type Error = ShelfError;

        fn from_create_params(id: u32, params: ShelfCreate) -> Result<Self, ShelfError> {
            if params.label.trim().is_empty() {
                return Err(ShelfError::BlankLabel);
            }
            Ok(Self {
                id,
                label: params.label,
                units: params.units,
            })
        }

        async fn on_update(&mut self, update: ShelfUpdate, _ctx: &()) -> Result<(), ShelfError> {
            if let Some(label) = update.label {
                if label.trim().is_empty() {
                    return Err(ShelfError::BlankLabel);
                }
                self.label = label;
            }
            Ok(())
        }

        async fn handle_action(&mut self, action: ShelfAction, _ctx: &()) -> Result<u32, ShelfError> {
            match action {
                ShelfAction::Take(n) => {
                    // Mutate before validating to prove the actor discards the draft.
                    let before = self.units;
                    self.units = self.units.saturating_sub(n);
                    if n > before {
                        return Err(ShelfError::Short(before));
                    }
                    Ok(self.units)
                }
            }
        }
    }

    fn shelf(label: &str, units: u32) -> ShelfCreate {
        ShelfCreate {
            label: label.into(),
            units,
        }
    }

    #[tokio::test]
    async fn test_catalog_lifecycle() {
        let (actor, client) = ResourceActor::<Shelf>::new(10);
        let handle = tokio::spawn(actor.run(()));

        let a = client.create(shelf("A", 5)).await.unwrap();
        let b = client.create(shelf("B", 1)).await.unwrap();
        assert_eq!((a, b), (1, 2));

        let left = client.perform_action(a, ShelfAction::Take(2)).await.unwrap();
        assert_eq!(left, 3);

        let renamed = client
            .update(b, ShelfUpdate { label: Some("B2".into()) })
            .await
            .unwrap();
        assert_eq!(renamed.label, "B2");

        let all = client.list().await.unwrap();
        assert_eq!(all.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 2]);

        client.delete(a).await.unwrap();
        assert!(client.get(a).await.unwrap().is_none());

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_failed_action_leaves_record_untouched() {
        let (actor, client) = ResourceActor::<Shelf>::new(10);
        tokio::spawn(actor.run(()));

        let id = client.create(shelf("A", 2)).await.unwrap();
        let err = client
            .perform_action(id, ShelfAction::Take(3))
            .await
            .unwrap_err();
        assert_eq!(err.downcast_entity::<ShelfError>().unwrap(), ShelfError::Short(2));

        let stored = client.get(id).await.unwrap().unwrap();
        assert_eq!(stored.units, 2);
    }

    #[tokio::test]
    async fn test_rejected_create_does_not_consume_id() {
        let (actor, client) = ResourceActor::<Shelf>::new(10);
        tokio::spawn(actor.run(()));

        assert!(client.create(shelf("  ", 1)).await.is_err());
        assert_eq!(client.create(shelf("A", 1)).await.unwrap(), 1);

        let missing = client.perform_action(9, ShelfAction::Take(1)).await;
        assert!(matches!(missing, Err(FrameworkError::NotFound(id)) if id == "9"));
    }
}
