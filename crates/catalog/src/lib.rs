//! Catalog domain module (products, companies, warehouse staff).
//!
//! This crate contains the immutable reference data the planning and shipping
//! engines read, plus the `ProductDirectory` seam through which they read it.
//! No IO, no HTTP, no storage.

pub mod company;
pub mod directory;
pub mod product;

pub use company::{Company, ContactInfo};
pub use directory::{Employee, ProductDirectory};
pub use product::Product;
