//! Data models for the resources catalog.
//!
//! Field names on the wire match the frontend TypeScript interfaces.

mod catalog;
mod filter;
mod links;
mod resource;

pub use catalog::*;
pub use filter::*;
pub use links::*;
pub use resource::*;
