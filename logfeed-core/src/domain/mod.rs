//! Core domain types
//!
//! This module contains the structures shared between the HTTP client
//! (which produces payloads) and the fetchers (which render them).

pub mod display;
pub mod fetch;
pub mod log;
