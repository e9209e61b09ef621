//! Command implementations, one module per subcommand.
//!
//! Each invocation runs in a fresh process, so privileged commands
//! (search, request-secret) take the master password and unlock the
//! vault in-process rather than relying on a session established by an
//! earlier invocation.

pub mod completions;
pub mod generate;
pub mod init;
pub mod lock;
pub mod request_secret;
pub mod search;
pub mod status;
pub mod unlock;

#[cfg(feature = "audit-log")]
pub mod audit_cmd;
