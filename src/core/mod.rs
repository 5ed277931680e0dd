//! Core library components.
//!
//! This module contains the reusable logic for secrets pairs, tool
//! discovery and the signing workflow. Nothing in here parses arguments or
//! prints to the terminal.

pub mod config;
pub mod constants;
pub mod domain;
pub mod platform;
pub mod runner;
pub mod signer;
pub mod store;
