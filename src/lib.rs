pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod homework;
pub mod logging;
pub mod notifier;
pub mod poller;
