//! Folder fetching service with token-based pagination.

pub mod config;
pub mod error;
pub mod model;
pub mod pagination;
pub mod service;
pub mod store;
pub mod token;
