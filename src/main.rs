use apotek_pos::checkout::CatalogItem;
use apotek_pos::clients::ActorClient;
use apotek_pos::config::StoreConfig;
use apotek_pos::import;
use apotek_pos::inventory_actor::StockReceipt;
use apotek_pos::lifecycle::{setup_tracing, PharmacySystem};
use apotek_pos::model::{BranchCreate, BranchStatus, SupplierCreate};
use chrono::{Days, Local};
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = StoreConfig::from_env().map_err(|e| e.to_string())?;
    let system = PharmacySystem::with_config(config);

    // Import the file given on the command line, or the bundled template
    let outcome = match std::env::args().nth(1) {
        Some(path) => import::import_file(&path),
        None => {
            info!("No file given, importing the template");
            import::import_csv(&import::template_csv())
        }
    };
    let summary = outcome.summary();
    println!(
        "{} produk valid, {} baris bermasalah",
        summary.valid, summary.invalid_rows
    );
    if !outcome.errors.is_empty() {
        let report = serde_json::to_string_pretty(&outcome.errors).map_err(|e| e.to_string())?;
        println!("{report}");
    }

    let report = system
        .import_products(&outcome)
        .instrument(tracing::info_span!("import"))
        .await
        .map_err(|e| e.to_string())?;
    info!(created = report.created.len(), updated = report.updated.len(), "Inventory loaded");

    let today = Local::now().date_naive();
    let supplier_id = system
        .suppliers
        .register(SupplierCreate {
            name: "PT Pharma Indonesia".into(),
            contact_person: "Budi Santoso".into(),
            phone: "021-5551234".into(),
            email: "budi@pharma.co.id".into(),
            address: "Jl. Industri No. 10, Jakarta".into(),
            created_at: today,
        })
        .await
        .map_err(|e| e.to_string())?;
    info!(%supplier_id, "Supplier registered");

    let branch_id = system
        .branches
        .open_branch(BranchCreate {
            name: system.config.store_name.clone(),
            address: system.config.address.clone(),
            city: "Jakarta".into(),
            phone: system.config.phone.clone(),
            manager: system.config.cashier.clone(),
            email: String::new(),
            status: BranchStatus::Active,
            opening_date: today,
        })
        .await
        .map_err(|e| e.to_string())?;
    info!(%branch_id, "Branch opened");

    // Sell two units of every imported product
    let mut cart = system.new_cart();
    for product in system.inventory.list().await.map_err(|e| e.to_string())? {
        let item = CatalogItem::from(&product);
        for _ in 0..2 {
            if let Err(e) = cart.add_or_increment(&item) {
                warn!(error = %e, "Not added to cart");
            }
        }
    }
    let totals = cart.totals();
    let tendered = (totals.total / 10_000 + 1) * 10_000;
    match system
        .checkout(&mut cart, tendered, Local::now().naive_local())
        .instrument(tracing::info_span!("checkout"))
        .await
    {
        Ok(receipt) => println!("{}", receipt.printed(&system.config)),
        Err(e) => error!(error = %e, "Checkout failed"),
    }

    // Restock the first product from the registered supplier
    if let Some(id) = report.created.first().copied() {
        let delivery = StockReceipt {
            quantity: 50,
            purchase_price: 5_000,
            selling_price: 7_500,
            supplier: "PT Pharma Indonesia".into(),
            expiry_date: today.checked_add_days(Days::new(365)).unwrap_or(today),
            batch_number: format!("BCH-{}", today.format("%Y%m%d")),
        };
        match system.receive_stock(id, delivery).await {
            Ok(received) => info!(stock = received.stock, cost = received.total_cost, "Restocked"),
            Err(e) => error!(error = %e, "Receiving failed"),
        }
    }

    let stock = system.inventory_summary().await.map_err(|e| e.to_string())?;
    println!(
        "Stok normal: {}, rendah: {}, kritis: {}",
        stock.normal, stock.low, stock.critical
    );

    let branches = system.branch_overview().await.map_err(|e| e.to_string())?;
    println!(
        "Cabang aktif: {} dari {}, penjualan Rp {}M",
        branches.active,
        branches.total,
        branches.sales_in_millions()
    );

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
