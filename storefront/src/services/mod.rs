// storefront/src/services/mod.rs

//! Collaborators of the order flow: persistence, sessions, the payment gateway.

pub mod order_access;
pub mod order_store;
pub mod payment_gateway;
pub mod payment_intents;
pub mod payment_mock;
pub mod session;
pub mod stripe;

pub use order_access::{authorize, resolve_order_access, AccessDecision, OrderAccess};
pub use order_store::{InMemoryOrderStore, OrderStore, PgOrderStore};
pub use payment_gateway::{ClientSecret, GatewayError, PaymentGateway, PaymentIntent, PaymentIntentRequest};
pub use payment_intents::PaymentIntentInitiator;
pub use payment_mock::{MockBehavior, MockPaymentGateway};
pub use session::{InMemorySessionStore, PgSessionStore, SessionProvider};
pub use stripe::StripeGateway;
