//! vs-core - Core library for videoshop
//!
//! This crate provides the domain model of the videoshop disc catalog:
//! products, discs with user comments and their aggregate rating, catalog
//! documents, configuration and export.

pub mod error;
pub mod types;
pub mod config;
pub mod product;
pub mod rating;
pub mod comment;
pub mod disc;
pub mod catalog;
pub mod export;
mod io;

pub use catalog::Catalog;
pub use comment::{Comment, CommentBuilder};
pub use disc::{Disc, DiscType};
pub use error::{Result, VideoshopError};
pub use product::{Money, Product};
pub use types::*;
