//! Error types for the Syndic engine.

use crate::{HouseNumber, UserId};
use thiserror::Error;

/// All possible errors from the Syndic engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    // Roster errors
    #[error("user not found: {0}")]
    UserNotFound(UserId),

    // House validation errors
    #[error("house number {house} out of range ({min}..={max})")]
    HouseOutOfRange {
        house: HouseNumber,
        min: HouseNumber,
        max: HouseNumber,
    },

    #[error("house {house} already assigned to user {user}")]
    DuplicateHouse { user: UserId, house: HouseNumber },

    #[error("house {house} not assigned to user {user}")]
    HouseNotAssigned { user: UserId, house: HouseNumber },

    // Serialization errors
    #[error("invalid user payload: {0}")]
    InvalidPayload(String),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
