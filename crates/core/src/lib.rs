//! TechMart Core - Shared types and store logic.
//!
//! This crate provides the domain types used across all TechMart components:
//! - `storefront` - Public-facing demo shop
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP,
//! no async. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and categories
//! - [`catalog`] - The read-only product catalog and its filter
//! - [`cart`] - The shopping cart store

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod types;

pub use cart::{Cart, CheckoutError, LineItem};
pub use catalog::{Catalog, Product};
pub use types::*;
