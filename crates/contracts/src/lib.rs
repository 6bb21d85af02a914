//! Shared catalog contracts: the data model served by the product catalog
//! API and the endpoint paths used to reach it.

pub mod domain;
pub mod shared;
