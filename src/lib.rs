//! Read-only HTTP query service over a collection of NBA player documents.

pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod model;
pub mod query;
