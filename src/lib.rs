pub mod cli;
pub mod config;
pub mod crypto;
pub mod errors;
pub mod generator;
pub mod session;
pub mod vault;

#[cfg(feature = "audit-log")]
pub mod audit;
