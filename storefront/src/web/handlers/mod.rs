// storefront/src/web/handlers/mod.rs

pub mod order_handlers;
pub mod page_handlers;
pub mod search_handlers;
