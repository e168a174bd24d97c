//! Domain values exposed by the search service layer.

pub mod entity;
pub mod health;
pub mod search;
pub mod types;
