//! Core types for TechMart.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod id;
pub mod price;

pub use category::{Category, ParseCategoryError};
pub use id::*;
pub use price::Price;
