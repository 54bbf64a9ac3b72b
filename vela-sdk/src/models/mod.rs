//! Wire models for the VPC API
//!
//! One module per resource family. Response structs mirror the JSON the
//! API returns, with `Option` for fields the API may omit; prototype
//! structs carry create requests and patch structs carry partial updates,
//! skipping unset fields so a PATCH only names what changed.

pub mod cluster_network;
pub mod common;
pub mod instance;
pub mod route_server;
pub mod share;
pub mod vpn_gateway;

pub use cluster_network::*;
pub use common::*;
pub use instance::*;
pub use route_server::*;
pub use share::*;
pub use vpn_gateway::*;
