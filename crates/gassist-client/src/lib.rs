//! gassist-client - typed HTTP client for the game assistant service
//!
//! This crate provides:
//! - The uniform response envelope and the payload types of every endpoint
//! - A fixed endpoint directory (method, path, parameter binding)
//! - An HTTP transport that issues one request per call and decodes the envelope
//! - A facade with one typed async method per endpoint

pub mod client;
pub mod config;
pub mod constants;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod model;

pub use client::AssistantClient;
pub use config::{AssistantClientConfig, SuccessCodes};
pub use endpoint::{Endpoint, ParamBinding};
pub use error::{AssistantError, Result};
pub use http::AssistantHttpClient;
pub use model::*;
