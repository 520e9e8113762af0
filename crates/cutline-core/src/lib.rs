//! # cutline-core
//!
//! Domain types shared by the cutline payment API and its browser frontend.
//! Builds for both native targets and `wasm32-unknown-unknown`, so nothing in
//! here may depend on an async runtime or the network.
//!
//! ```text
//! ┌──────────────────┐   GET /api/payment/pricing   ┌──────────────────┐
//! │   cutline-web    │ ───────────────────────────▶ │  cutline-server  │
//! │  (Leptos, WASM)  │ ◀─────── Catalog JSON ────── │     (axum)       │
//! └────────┬─────────┘                              └────────┬─────────┘
//!          │             ┌──────────────────┐                │
//!          └────────────▶│   cutline-core   │◀───────────────┘
//!                        │ catalog, payout  │
//!                        └──────────────────┘
//! ```
//!
//! All money is integer cents on the wire and `rust_decimal::Decimal` once it
//! is converted to major units.

pub mod card;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;
pub mod payout;
pub mod wire;

pub use catalog::{Catalog, ServiceOffering};
pub use checkout::{simulate_confirmation, CardForm, CheckoutTicket};
pub use error::{CoreError, Result};
pub use payout::CryptoPayout;
pub use wire::{ConfirmRequest, ConfirmResponse, CreateIntentRequest, CreateIntentResponse, PaymentSummary};
