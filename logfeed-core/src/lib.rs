//! Logfeed Core
//!
//! Core types and abstractions shared by the logfeed client and CLI.
//!
//! This crate contains:
//! - Domain types: the log payload, fetch lifecycle states
//! - Display targets: the output sink that fetchers render into

pub mod domain;
