//! # Apotek POS
//!
//! Core of a small pharmacy point of sale: a bulk product import from CSV
//! master files and a checkout calculator, around an actor-held inventory.
//!
//! ## Module Tour
//!
//! ### 1. Pure computations ([`import`], [`checkout`])
//! - [`import::parse`] and [`import::validate`] turn a CSV upload into
//!   products plus row-level diagnostics. Nothing in a bad row aborts the batch.
//! - [`checkout::Cart`] enforces stock ceilings; [`checkout::compute_totals`]
//!   prices it with 10% tax rounded half up; a successful checkout yields a
//!   printable [`checkout::Receipt`].
//!
//! ### 2. The Engine ([`framework`])
//! The generic [`ResourceActor`](framework::ResourceActor) that owns a catalog
//! of records and processes requests one at a time.
//!
//! ### 3. The Catalogs ([`inventory_actor`], [`supplier_actor`], [`branch_actor`])
//! [`ActorEntity`](framework::ActorEntity) implementations for
//! [`Product`](model::Product), [`Supplier`](model::Supplier) and
//! [`Branch`](model::Branch), with their stock and status actions.
//!
//! ### 4. The Interface ([`clients`])
//! [`InventoryClient`](clients::InventoryClient),
//! [`SupplierClient`](clients::SupplierClient) and
//! [`BranchClient`](clients::BranchClient) hide the message passing.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`PharmacySystem`](lifecycle::PharmacySystem) spawns the actors and runs
//! the workflows that span them: import merge, checkout with stock
//! reservation, stock receiving.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run -- master_produk.csv
//! ```

pub mod branch_actor;
pub mod checkout;
pub mod clients;
pub mod config;
pub mod framework;
pub mod import;
pub mod inventory_actor;
pub mod lifecycle;
pub mod model;
pub mod supplier_actor;
