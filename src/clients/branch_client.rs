use crate::branch_actor::{BranchAction, BranchActionResult, BranchError};
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Branch, BranchCreate, BranchId, BranchOverview, BranchStatus, BranchUpdate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the branch actor.
#[derive(Clone)]
pub struct BranchClient {
    inner: ResourceClient<Branch>,
}

impl BranchClient {
    pub fn new(inner: ResourceClient<Branch>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Branch> for BranchClient {
    type Error = BranchError;

    fn inner(&self) -> &ResourceClient<Branch> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<BranchError>() {
            Ok(domain) => domain,
            Err(FrameworkError::NotFound(id)) => BranchError::NotFound(id),
            Err(other) => BranchError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl BranchClient {
    #[instrument(skip(self, params), fields(name = %params.name, city = %params.city))]
    pub async fn open_branch(&self, params: BranchCreate) -> Result<BranchId, BranchError> {
        debug!(?params, "Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_branch(
        &self,
        id: BranchId,
        update: BranchUpdate,
    ) -> Result<Branch, BranchError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Flips the branch between active and inactive, returning the new
    /// status.
    #[instrument(skip(self))]
    pub async fn toggle_status(&self, id: BranchId) -> Result<BranchStatus, BranchError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, BranchAction::ToggleStatus)
            .await
            .map_err(Self::map_error)?
        {
            BranchActionResult::Status(status) => Ok(status),
        }
    }

    #[instrument(skip(self))]
    pub async fn overview(&self) -> Result<BranchOverview, BranchError> {
        let branches = self.list().await?;
        Ok(BranchOverview::from_branches(&branches))
    }
}
