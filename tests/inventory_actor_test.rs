use apotek_pos::clients::{ActorClient, InventoryClient};
use apotek_pos::inventory_actor::{self, InventoryError};
use apotek_pos::model::{ProductCreate, ProductId, StockStatus};
use chrono::NaiveDate;

fn insulin(stock: u32) -> ProductCreate {
    ProductCreate {
        sku: "INS001".into(),
        name: "Insulin Pen".into(),
        stock,
        min_stock: 10,
        price: 150_000,
        expiry_date: NaiveDate::from_ymd_opt(2025, 11, 30).unwrap(),
        batch_number: "INS-2411".into(),
        supplier: "PT Biofarma".into(),
        category: "Hormon".into(),
    }
}

/// Real inventory actor driven by several tills at once.
#[tokio::test]
async fn test_concurrent_reservations_never_oversell() {
    let (actor, inner) = inventory_actor::new();
    let handle = tokio::spawn(actor.run(()));
    let inventory = InventoryClient::new(inner);

    let id = inventory.create_product(insulin(15)).await.unwrap();

    let mut tills = vec![];
    for _ in 0..10 {
        let till = inventory.clone();
        tills.push(tokio::spawn(async move { till.reserve_stock(id, 2).await }));
    }

    let mut sold = 0;
    let mut refused = 0;
    for till in tills {
        match till.await.unwrap() {
            Ok(_) => sold += 1,
            Err(InventoryError::InsufficientStock { requested: 2, available: 1 }) => refused += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
    assert_eq!(sold, 7);
    assert_eq!(refused, 3);

    let product = inventory.get(id).await.unwrap().unwrap();
    assert_eq!(product.stock, 1);
    assert_eq!(product.status, StockStatus::Critical);

    drop(inventory);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_rejected_create_does_not_use_an_id() {
    let (actor, inner) = inventory_actor::new();
    let handle = tokio::spawn(actor.run(()));
    let inventory = InventoryClient::new(inner);

    let blank = ProductCreate {
        name: "   ".into(),
        ..insulin(5)
    };
    assert!(matches!(
        inventory.create_product(blank).await,
        Err(InventoryError::InvalidProduct(_))
    ));
    assert_eq!(inventory.create_product(insulin(5)).await, Ok(ProductId(1)));

    assert_eq!(
        inventory.release_stock(ProductId(2), 1).await,
        Err(InventoryError::NotFound("PRD-0002".into()))
    );
    assert_eq!(inventory.release_stock(ProductId(1), 3).await, Ok(8));

    inventory.delete(ProductId(1)).await.unwrap();
    assert!(inventory.list().await.unwrap().is_empty());

    drop(inventory);
    handle.await.unwrap();
}
