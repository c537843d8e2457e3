use crate::checkout::{Cart, CatalogItem, CheckoutError, Receipt};
use crate::branch_actor::BranchError;
use crate::clients::{ActorClient, BranchClient, InventoryClient, SupplierClient};
use crate::config::StoreConfig;
use crate::import::{ImportError, ImportOutcome};
use crate::inventory_actor::{InventoryError, StockReceipt, StockReceived};
use crate::model::{BranchOverview, InventorySummary, ProductCreate, ProductId, ProductUpdate};
use chrono::NaiveDateTime;
use std::collections::HashMap;
use tracing::{error, info, instrument, warn};

/// Products touched by an import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// New SKUs, in file order.
    pub created: Vec<ProductId>,
    /// SKUs that already existed and were overwritten, in file order.
    pub updated: Vec<ProductId>,
}

/// The runtime orchestrator for the store.
///
/// `PharmacySystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the inventory, supplier
///   and branch actors
/// - **Workflows**: Operations that span both catalogs or need compensation
///   (import merge, checkout, stock receiving)
///
/// # Example
///
/// ```ignore
/// let system = PharmacySystem::new();
/// system.import_products(&import::import_csv(&text)).await?;
///
/// let mut cart = system.new_cart();
/// cart.add_or_increment(&system.catalog_item(ProductId(1)).await?)?;
/// let receipt = system.checkout(&mut cart, 50_000, now).await?;
/// println!("{}", receipt.printed(&system.config));
///
/// system.shutdown().await?;
/// ```
pub struct PharmacySystem {
    /// Client for the product catalog
    pub inventory: InventoryClient,

    /// Client for the supplier registry
    pub suppliers: SupplierClient,

    /// Client for the branch registry
    pub branches: BranchClient,

    pub config: StoreConfig,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl PharmacySystem {
    /// Starts every actor with the default store settings.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Starts every actor. Must be called inside a Tokio runtime.
    pub fn with_config(config: StoreConfig) -> Self {
        let (inventory_actor, inventory_client) = crate::inventory_actor::new();
        let (supplier_actor, supplier_client) = crate::supplier_actor::new();
        let (branch_actor, branch_client) = crate::branch_actor::new();

        // No catalog depends on another (Context = ())
        let inventory_handle = tokio::spawn(inventory_actor.run(()));
        let supplier_handle = tokio::spawn(supplier_actor.run(()));
        let branch_handle = tokio::spawn(branch_actor.run(()));

        info!(store = %config.store_name, tax = %config.tax_rate, "System started");
        Self {
            inventory: InventoryClient::new(inventory_client),
            suppliers: SupplierClient::new(supplier_client),
            branches: BranchClient::new(branch_client),
            config,
            handles: vec![inventory_handle, supplier_handle, branch_handle],
        }
    }

    /// An empty cart taxed at the configured rate.
    pub fn new_cart(&self) -> Cart {
        Cart::with_tax_rate(self.config.tax_rate)
    }

    /// Merges the valid rows of an import into the inventory.
    ///
    /// Products are matched by SKU: a known SKU has its record replaced, an
    /// unknown one is created. An outcome without valid rows is refused and
    /// leaves the inventory untouched. Merging stops at the first product the
    /// inventory rejects; rows merged before it stay merged.
    #[instrument(skip(self, outcome), fields(valid = outcome.products.len()))]
    pub async fn import_products(&self, outcome: &ImportOutcome) -> Result<ImportReport, ImportError> {
        if outcome.products.is_empty() {
            let invalid_rows = outcome.summary().invalid_rows;
            warn!(invalid_rows, "Nothing to import");
            return Err(ImportError::EmptySelection { invalid_rows });
        }

        let mut by_sku: HashMap<String, ProductId> = self
            .inventory
            .list()
            .await
            .map_err(|e| ImportError::Inventory(e.to_string()))?
            .into_iter()
            .map(|p| (p.sku, p.id))
            .collect();

        let mut report = ImportReport::default();
        for product in &outcome.products {
            let sku = product.sku.clone();
            let merge_err = |e: InventoryError| ImportError::Merge {
                sku: sku.clone(),
                reason: e.to_string(),
            };
            match by_sku.get(&sku) {
                Some(&id) => {
                    self.inventory
                        .update_product(id, ProductUpdate::from(product.clone()))
                        .await
                        .map_err(merge_err)?;
                    report.updated.push(id);
                }
                None => {
                    let id = self
                        .inventory
                        .create_product(ProductCreate::from(product.clone()))
                        .await
                        .map_err(merge_err)?;
                    by_sku.insert(sku.clone(), id);
                    report.created.push(id);
                }
            }
        }

        info!(
            created = report.created.len(),
            updated = report.updated.len(),
            "Import merged"
        );
        Ok(report)
    }

    /// Snapshot of a product for adding to a cart.
    #[instrument(skip(self))]
    pub async fn catalog_item(&self, id: ProductId) -> Result<CatalogItem, InventoryError> {
        self.inventory
            .get(id)
            .await?
            .map(|p| CatalogItem::from(&p))
            .ok_or_else(|| InventoryError::NotFound(id.to_string()))
    }

    /// Completes a sale against the live inventory.
    ///
    /// The cart is priced and the payment checked first. Then every line's
    /// quantity is reserved; if any reservation fails, the lines already
    /// reserved are released and the cart is left as it was.
    #[instrument(skip(self, cart), fields(lines = cart.lines().len()))]
    pub async fn checkout(
        &self,
        cart: &mut Cart,
        tendered: u64,
        issued_at: NaiveDateTime,
    ) -> Result<Receipt, CheckoutError> {
        let receipt = cart.prepare_receipt(tendered, issued_at)?;

        let mut reserved: Vec<(ProductId, u32)> = Vec::with_capacity(receipt.lines.len());
        for line in &receipt.lines {
            match self
                .inventory
                .reserve_stock(line.product_id, line.quantity)
                .await
            {
                Ok(remaining) => {
                    reserved.push((line.product_id, line.quantity));
                    info!(product_id = %line.product_id, quantity = line.quantity, remaining, "Reserved");
                }
                Err(e) => {
                    warn!(product_id = %line.product_id, error = %e, "Reservation failed, rolling back");
                    self.release_all(&reserved).await;
                    return Err(match e {
                        InventoryError::InsufficientStock {
                            requested,
                            available,
                        } => CheckoutError::InsufficientStock {
                            product_id: line.product_id,
                            name: line.name.clone(),
                            requested,
                            available,
                        },
                        other => CheckoutError::Inventory(other.to_string()),
                    });
                }
            }
        }

        cart.clear();
        info!(total = receipt.totals.total, change = receipt.change, "Sale completed");
        Ok(receipt)
    }

    async fn release_all(&self, reserved: &[(ProductId, u32)]) {
        for &(id, quantity) in reserved {
            if let Err(e) = self.inventory.release_stock(id, quantity).await {
                error!(product_id = %id, quantity, error = %e, "Release failed");
            }
        }
    }

    /// Books a delivery and counts it against the supplier.
    ///
    /// The supplier is matched by name. A name that is not in the registry
    /// still gets its stock booked; only the order counter is skipped.
    #[instrument(skip(self, receipt), fields(supplier = %receipt.supplier))]
    pub async fn receive_stock(
        &self,
        id: ProductId,
        receipt: StockReceipt,
    ) -> Result<StockReceived, InventoryError> {
        let supplier_name = receipt.supplier.clone();
        let received = self.inventory.receive_stock(id, receipt).await?;
        info!(product_id = %id, stock = received.stock, cost = received.total_cost, "Stock received");

        match self.suppliers.find_by_name(&supplier_name).await {
            Ok(Some(supplier)) => match self.suppliers.record_order(supplier.id).await {
                Ok(total) => info!(supplier_id = %supplier.id, total_orders = total, "Order recorded"),
                Err(e) => warn!(supplier_id = %supplier.id, error = %e, "Order not recorded"),
            },
            Ok(None) => warn!("Supplier not registered, order not recorded"),
            Err(e) => warn!(error = %e, "Supplier lookup failed"),
        }
        Ok(received)
    }

    pub async fn inventory_summary(&self) -> Result<InventorySummary, InventoryError> {
        self.inventory.summary().await
    }

    pub async fn branch_overview(&self) -> Result<BranchOverview, BranchError> {
        self.branches.overview().await
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the channels; each actor then drains its
    /// queue and exits. Returns an error if any actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.inventory);
        drop(self.suppliers);
        drop(self.branches);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for PharmacySystem {
    fn default() -> Self {
        Self::new()
    }
}
