//! Province production-economics model.
//!
//! A province sells its demand at a unit price and buys it from producers in
//! merit order (cheapest marginal cost first). This crate is deterministic
//! domain logic (no IO, no storage).

pub mod producer;
pub mod province;
pub mod sample;

pub use producer::{Producer, ProducerData, ProducerId};
pub use province::{Province, ProvinceData};
pub use sample::sample_province_data;
