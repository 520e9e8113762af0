//! # cutline-payments
//!
//! Payment processing for the cutline studio site.
//!
//! ## Flow
//!
//! ```text
//! ┌─────────────┐  create-intent   ┌─────────────────┐
//! │   Browser   │ ───────────────▶ │ PaymentGateway  │──▶ Stripe / in-memory
//! │  (checkout) │ ◀── secret ───── │                 │
//! └─────────────┘                  └─────────────────┘
//!        │ confirm                          │ status == succeeded
//!        ▼                                  ▼
//! ┌─────────────┐                  ┌─────────────────┐
//! │   Server    │ ───────────────▶ │ MockCryptoPayout│──▶ log + fake tx id
//! └─────────────┘                  └─────────────────┘
//! ```
//!
//! The payout is a stub. It never moves funds and keeps no state between
//! calls.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cutline_payments::{NewIntent, PaymentGateway, StripeGateway};
//!
//! let gateway = StripeGateway::new("sk_test_xxx");
//! let intent = gateway
//!     .create_intent(NewIntent::new(2500).service(Some("basic-edit".into())))
//!     .await?;
//!
//! // Hand intent.client_secret to the browser
//! ```

mod error;
mod gateway;
mod memory;
mod payout;
mod stripe_gateway;

pub use error::{PaymentError, Result};
pub use gateway::{
    IntentStatus, NewIntent, PaymentGateway, PaymentIntentRecord, DEFAULT_SERVICE_TAG,
    UNKNOWN_CUSTOMER,
};
pub use memory::InMemoryGateway;
pub use payout::MockCryptoPayout;
pub use stripe_gateway::StripeGateway;
