//! # Inventory Client
//!
//! High-level API for the product catalog. Wraps a `ResourceClient<Product>`
//! and turns each stock action into a method with a plain return type.

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::inventory_actor::{
    InventoryError, ProductAction, ProductActionResult, StockReceipt, StockReceived,
};
use crate::model::{InventorySummary, Product, ProductCreate, ProductId, ProductUpdate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the inventory actor.
#[derive(Clone)]
pub struct InventoryClient {
    inner: ResourceClient<Product>,
}

impl InventoryClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for InventoryClient {
    type Error = InventoryError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<InventoryError>() {
            Ok(domain) => domain,
            Err(FrameworkError::NotFound(id)) => InventoryError::NotFound(id),
            Err(other) => InventoryError::ActorCommunicationError(other.to_string()),
        }
    }
}

fn unexpected(result: ProductActionResult) -> InventoryError {
    InventoryError::ActorCommunicationError(format!("unexpected action result: {result:?}"))
}

impl InventoryClient {
    #[instrument(skip(self, params), fields(sku = %params.sku))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, InventoryError> {
        debug!(?params, "Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, InventoryError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// The product carrying `sku`, if any.
    #[instrument(skip(self))]
    pub async fn find_by_sku(&self, sku: &str) -> Result<Option<Product>, InventoryError> {
        let products = self.list().await?;
        Ok(products.into_iter().find(|p| p.sku == sku))
    }

    /// Check the current stock level for a product.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<u32, InventoryError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, ProductAction::CheckStock)
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::Stock(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }

    /// Takes `quantity` units out of stock. Returns what is left.
    #[instrument(skip(self))]
    pub async fn reserve_stock(&self, id: ProductId, quantity: u32) -> Result<u32, InventoryError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, ProductAction::ReserveStock(quantity))
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::Reserved { remaining } => Ok(remaining),
            other => Err(unexpected(other)),
        }
    }

    /// Puts `quantity` units back. Returns the new level.
    #[instrument(skip(self))]
    pub async fn release_stock(&self, id: ProductId, quantity: u32) -> Result<u32, InventoryError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, ProductAction::ReleaseStock(quantity))
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::Released { stock } => Ok(stock),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self, receipt), fields(quantity = receipt.quantity))]
    pub async fn receive_stock(
        &self,
        id: ProductId,
        receipt: StockReceipt,
    ) -> Result<StockReceived, InventoryError> {
        debug!(?receipt, "Sending request");
        match self
            .inner
            .perform_action(id, ProductAction::ReceiveStock(receipt))
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::Received(received) => Ok(received),
            other => Err(unexpected(other)),
        }
    }

    /// Count of products per stock status.
    #[instrument(skip(self))]
    pub async fn summary(&self) -> Result<InventorySummary, InventoryError> {
        let products = self.list().await?;
        Ok(InventorySummary::from_products(&products))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, MockClient};
    use crate::model::StockStatus;
    use chrono::NaiveDate;

    fn product(id: u32, sku: &str, stock: u32, min_stock: u32) -> Product {
        let mut p = Product::new(
            ProductId(id),
            ProductCreate {
                sku: sku.into(),
                name: format!("Produk {sku}"),
                stock,
                min_stock,
                price: 10_000,
                expiry_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
                batch_number: "B1".into(),
                supplier: "PT Kimia Farma".into(),
                category: "Umum".into(),
            },
        );
        p.refresh_status();
        p
    }

    #[tokio::test]
    async fn check_stock_returns_level() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let inventory = InventoryClient::new(client);

        let task = tokio::spawn(async move { inventory.check_stock(ProductId(1)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, ProductId(1));
        assert_eq!(action, ProductAction::CheckStock);
        responder.send(Ok(ProductActionResult::Stock(42))).unwrap();

        assert_eq!(task.await.unwrap(), Ok(42));
    }

    #[tokio::test]
    async fn reserve_stock_reports_remaining() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_action(ProductId(1))
            .return_ok(ProductActionResult::Reserved { remaining: 4 });

        let inventory = InventoryClient::new(mock.client());
        assert_eq!(inventory.reserve_stock(ProductId(1), 1).await, Ok(4));
        mock.verify();
    }

    #[tokio::test]
    async fn domain_error_survives_the_channel() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_action(ProductId(1))
            .return_err(FrameworkError::EntityError(Box::new(
                InventoryError::InsufficientStock {
                    requested: 100,
                    available: 3,
                },
            )));

        let inventory = InventoryClient::new(mock.client());
        let err = inventory.reserve_stock(ProductId(1), 100).await.unwrap_err();
        assert_eq!(
            err,
            InventoryError::InsufficientStock {
                requested: 100,
                available: 3
            }
        );
    }

    #[tokio::test]
    async fn missing_product_maps_to_not_found() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_action(ProductId(9))
            .return_err(FrameworkError::NotFound("PRD-0009".into()));

        let inventory = InventoryClient::new(mock.client());
        assert_eq!(
            inventory.check_stock(ProductId(9)).await,
            Err(InventoryError::NotFound("PRD-0009".into()))
        );
    }

    #[tokio::test]
    async fn mismatched_result_is_an_error_not_a_panic() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_action(ProductId(1))
            .return_ok(ProductActionResult::Stock(1));

        let inventory = InventoryClient::new(mock.client());
        assert!(matches!(
            inventory.release_stock(ProductId(1), 1).await,
            Err(InventoryError::ActorCommunicationError(_))
        ));
    }

    #[tokio::test]
    async fn lookup_by_sku_and_summary_use_list() {
        let mut mock = MockClient::<Product>::new();
        let products = vec![
            product(1, "PCM001", 150, 50),
            product(2, "AMX001", 25, 30),
            product(3, "INS001", 5, 20),
        ];
        mock.expect_list().return_ok(products.clone());
        mock.expect_list().return_ok(products);

        let inventory = InventoryClient::new(mock.client());
        let found = inventory.find_by_sku("AMX001").await.unwrap().unwrap();
        assert_eq!(found.id, ProductId(2));
        assert_eq!(found.status, StockStatus::Low);

        let summary = inventory.summary().await.unwrap();
        assert_eq!((summary.normal, summary.low, summary.critical), (1, 1, 1));
        mock.verify();
    }
}
