//! Command modules
//!
//! Modules:
//! - toolkit: Command-driven tools (convert, price, abi)

pub mod toolkit;
