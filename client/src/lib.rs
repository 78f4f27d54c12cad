//! Syndic Client - optimistic synchronization against the remote directory.
//!
//! This crate is the IO shell around [`syndic_engine`]: it speaks HTTP to
//! the condominium platform's user directory and keeps the engine's roster
//! consistent with it. The [`Synchronizer`] applies the minimal local patch
//! for each mutation kind and publishes roster and status changes through
//! watch channels, so consumers re-render from cheap subscriptions.

pub mod config;
pub mod directory;
pub mod error;
pub mod http;
pub mod sync;

pub use config::{Config, ConfigError};
pub use directory::{Ack, UserDirectory};
pub use error::{ClientError, Result};
pub use http::HttpDirectory;
pub use sync::Synchronizer;
