use crate::model::ProductId;
use thiserror::Error;

/// Why a cart operation or a checkout was refused. The cart is never changed
/// when one of these is returned.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckoutError {
    #[error("Stok tidak mencukupi untuk {name}: diminta {requested}, tersedia {available}")]
    InsufficientStock {
        product_id: ProductId,
        name: String,
        requested: u32,
        available: u32,
    },

    #[error("Uang pembayaran tidak mencukupi: total Rp {total}, dibayar Rp {tendered}")]
    InsufficientPayment { total: u64, tendered: u64 },

    /// The change would push the cart total past what a rupiah amount can hold.
    #[error("Total belanja terlalu besar untuk dihitung")]
    AmountTooLarge,

    #[error("Keranjang kosong")]
    EmptyCart,

    #[error("Produk {0} tidak ada di keranjang")]
    LineNotFound(ProductId),

    /// The inventory refused to reserve stock for the sale.
    #[error("Inventory error: {0}")]
    Inventory(String),
}
