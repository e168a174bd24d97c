//! DTOs that bridge services with the JSON API.

pub mod api;
pub mod health;
pub mod search;
