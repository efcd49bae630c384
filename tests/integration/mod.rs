//! Integration tests for homework-bot
//!
//! These drive the public API and the binary against local HTTP servers.

pub mod fetch;
pub mod helpers;
pub mod telegram;
