use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Supplier, SupplierCreate, SupplierId, SupplierStatus, SupplierUpdate};
use crate::supplier_actor::{SupplierAction, SupplierActionResult, SupplierError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the supplier actor.
#[derive(Clone)]
pub struct SupplierClient {
    inner: ResourceClient<Supplier>,
}

impl SupplierClient {
    pub fn new(inner: ResourceClient<Supplier>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Supplier> for SupplierClient {
    type Error = SupplierError;

    fn inner(&self) -> &ResourceClient<Supplier> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<SupplierError>() {
            Ok(domain) => domain,
            Err(FrameworkError::NotFound(id)) => SupplierError::NotFound(id),
            Err(other) => SupplierError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl SupplierClient {
    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn register(&self, params: SupplierCreate) -> Result<SupplierId, SupplierError> {
        debug!(?params, "Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_supplier(
        &self,
        id: SupplierId,
        update: SupplierUpdate,
    ) -> Result<Supplier, SupplierError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Flips the supplier between active and inactive, returning the new
    /// status.
    #[instrument(skip(self))]
    pub async fn toggle_status(&self, id: SupplierId) -> Result<SupplierStatus, SupplierError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, SupplierAction::ToggleStatus)
            .await
            .map_err(Self::map_error)?
        {
            SupplierActionResult::Status(status) => Ok(status),
            other => Err(SupplierError::ActorCommunicationError(format!(
                "unexpected action result: {other:?}"
            ))),
        }
    }

    /// Bumps the order counter, returning the new total.
    #[instrument(skip(self))]
    pub async fn record_order(&self, id: SupplierId) -> Result<u32, SupplierError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, SupplierAction::RecordOrder)
            .await
            .map_err(Self::map_error)?
        {
            SupplierActionResult::Orders(total) => Ok(total),
            other => Err(SupplierError::ActorCommunicationError(format!(
                "unexpected action result: {other:?}"
            ))),
        }
    }

    /// Suppliers matching `term` by name, contact person or phone.
    #[instrument(skip(self))]
    pub async fn search(&self, term: &str) -> Result<Vec<Supplier>, SupplierError> {
        let suppliers = self.list().await?;
        Ok(suppliers.into_iter().filter(|s| s.matches(term)).collect())
    }

    /// Exact name lookup, ignoring case and surrounding blanks.
    #[instrument(skip(self))]
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Supplier>, SupplierError> {
        let wanted = name.trim().to_lowercase();
        let suppliers = self.list().await?;
        Ok(suppliers
            .into_iter()
            .find(|s| s.name.trim().to_lowercase() == wanted))
    }
}
