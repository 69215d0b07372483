// Contract integration module
// This module handles all interactions with the deployed campaign contracts

pub mod artifacts;
pub mod client;
pub mod config;
pub mod types;

// Re-export main components for easy access
pub use client::{ChainClient, ReadOnlyChainClient};
pub use types::*;
