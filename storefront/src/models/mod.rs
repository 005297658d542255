// storefront/src/models/mod.rs

//! Data structures read from persistence and handed to the page payloads.

pub mod money;
pub mod order;
pub mod shipping_address;
pub mod user;

pub use money::Currency;
pub use order::{Order, OrderItem, OrderUser, PaymentMethod, PaymentResult};
pub use shipping_address::{DeliveryMethod, OmnivaLocation, ShippingAddress};
pub use user::{Role, Session};
