//! The remote user directory, as seen by the client.
//!
//! All remote collaborators are reached through one trait so the
//! synchronizer can be exercised against an in-memory directory in tests.
//! Role, status, and observation updates echo the canonical entity; house
//! mutations return only a confirmation; delete returns nothing.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use syndic_engine::{HouseNumber, Role, Status, User};

/// Lightweight confirmation returned by house mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ack {
    /// Human-readable confirmation
    pub message: String,
}

/// Request body for a role update.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleUpdate {
    pub role: Role,
}

/// Request body for a status update.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub status: Status,
}

/// Request body for an observations update.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationsUpdate {
    pub observations: Option<String>,
}

/// Request body for a house assignment.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseAssignment {
    pub house: HouseNumber,
}

/// Remote authority for the user roster.
///
/// All methods are `Send + Sync` to support concurrent access from async
/// tasks.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch the full user listing.
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Change a user's role. Echoes the canonical updated entity.
    async fn update_role(&self, id: &str, role: Role) -> Result<User>;

    /// Change a user's status. Echoes the canonical updated entity.
    async fn update_status(&self, id: &str, status: Status) -> Result<User>;

    /// Replace a user's observations. Echoes the canonical updated entity.
    async fn update_observations(&self, id: &str, observations: Option<&str>) -> Result<User>;

    /// Assign a house number to a user. Returns a confirmation only.
    async fn assign_house(&self, id: &str, house: HouseNumber) -> Result<Ack>;

    /// Remove a house number from a user. Returns a confirmation only.
    async fn remove_house(&self, id: &str, house: HouseNumber) -> Result<Ack>;

    /// Delete a user.
    async fn delete_user(&self, id: &str) -> Result<()>;
}
