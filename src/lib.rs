pub mod chain;
pub mod config;
pub mod format;
pub mod inspector;
pub mod models;
pub mod network;
pub mod ops;
pub mod report;
pub mod wallet;
