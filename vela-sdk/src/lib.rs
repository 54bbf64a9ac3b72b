//! Vela VPC SDK
//!
//! Typed client for the regional VPC REST API. Every operation is one
//! JSON-over-HTTPS request/response; collection operations return a
//! single page plus an opaque continuation token, with [`paging::list_all`]
//! driving the token loop. Errors are returned to the caller immediately;
//! there is no retry layer.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod paging;

pub use client::VpcClient;
pub use config::Config;
pub use error::{Error, Result};
