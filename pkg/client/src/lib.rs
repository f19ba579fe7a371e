//! HTTP access to the cluster API.

pub mod api;

pub use api::ApiClient;
