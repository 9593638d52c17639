//! `repertory-core` — shared domain building blocks.
//!
//! This crate contains **pure domain** primitives used by both the province
//! model and the statement builder (no IO, no rendering, no logging setup).

pub mod entity;
pub mod error;
pub mod money;
pub mod parse;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use money::{Cents, usd};
pub use parse::parse_int;
pub use value_object::ValueObject;
