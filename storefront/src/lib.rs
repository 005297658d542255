// storefront/src/lib.rs

//! Prostore storefront: order page flow with payment intent creation,
//! catalog search navigation and localized static pages.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod i18n;
pub mod models;
pub mod pages;
pub mod pipelines;
pub mod services;
pub mod state;
pub mod web;
