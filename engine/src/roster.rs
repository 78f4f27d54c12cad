//! Roster - the client-held user collection.
//!
//! The roster is the single local copy of the remote user directory. It has
//! exactly one writer; every mutation swaps in a freshly built sequence and
//! bumps a revision counter, so readers detect changes without diffing.
//!
//! Patch rules mirror what the remote returns:
//! - a listing replaces the whole roster
//! - role/status/observation updates return the canonical entity, which
//!   replaces the held one by id
//! - house assignment and removal return only a confirmation, so the roster
//!   predicts the new state itself
//! - a delete is never spliced locally; the caller refetches the listing

use crate::{
    error::{Error, Result},
    user::validate_house_number,
    HouseNumber, Revision, User,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The client-held collection of users.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roster {
    users: Arc<Vec<User>>,
    revision: Revision,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// The held users, in listing order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Shared handle to the held sequence.
    ///
    /// Two handles pointing at the same allocation mean no mutation happened
    /// between them.
    pub fn shared(&self) -> Arc<Vec<User>> {
        Arc::clone(&self.users)
    }

    /// Monotonic counter, bumped by every mutation.
    pub fn revision(&self) -> Revision {
        self.revision
    }

    /// Find a user by id.
    pub fn get(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Check whether a user id is held.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Count of held users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Check if the roster holds no users.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Replace the whole roster with a fresh listing.
    pub fn replace_all(&mut self, users: Vec<User>) {
        self.users = Arc::new(users);
        self.revision += 1;
    }

    /// Replace a single user with the server's canonical version.
    ///
    /// All other entries are carried over untouched. Fails if the id is not
    /// held (e.g. the user was deleted by another session).
    pub fn replace_user(&mut self, echo: User) -> Result<()> {
        if !self.contains(&echo.id) {
            return Err(Error::UserNotFound(echo.id));
        }

        let next: Vec<User> = self
            .users
            .iter()
            .map(|u| if u.id == echo.id { echo.clone() } else { u.clone() })
            .collect();
        self.users = Arc::new(next);
        self.revision += 1;
        Ok(())
    }

    /// Validate a house assignment without mutating.
    ///
    /// Used before issuing the remote call, so an invalid request makes no
    /// round-trip at all.
    pub fn check_assign(&self, id: &str, house: HouseNumber) -> Result<()> {
        validate_house_number(house)?;
        let user = self.get(id).ok_or_else(|| Error::UserNotFound(id.into()))?;
        if user.has_house(house) {
            return Err(Error::DuplicateHouse {
                user: user.id.clone(),
                house,
            });
        }
        Ok(())
    }

    /// Validate a house removal without mutating.
    pub fn check_remove(&self, id: &str, house: HouseNumber) -> Result<()> {
        let user = self.get(id).ok_or_else(|| Error::UserNotFound(id.into()))?;
        if !user.has_house(house) {
            return Err(Error::HouseNotAssigned {
                user: user.id.clone(),
                house,
            });
        }
        Ok(())
    }

    /// Append a house number to a user's assignments.
    pub fn assign_house(&mut self, id: &str, house: HouseNumber) -> Result<()> {
        self.check_assign(id, house)?;
        self.patch_user(id, |user| user.houses.push(house));
        Ok(())
    }

    /// Drop a house number from a user's assignments.
    pub fn remove_house(&mut self, id: &str, house: HouseNumber) -> Result<()> {
        self.check_remove(id, house)?;
        self.patch_user(id, |user| user.houses.retain(|&h| h != house));
        Ok(())
    }

    /// Rebuild the sequence with one entry patched. Callers validate first.
    fn patch_user(&mut self, id: &str, patch: impl Fn(&mut User)) {
        let next: Vec<User> = self
            .users
            .iter()
            .map(|u| {
                let mut user = u.clone();
                if user.id == id {
                    patch(&mut user);
                }
                user
            })
            .collect();
        self.users = Arc::new(next);
        self.revision += 1;
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::InvalidPayload(e.to_string()))
    }

    /// Deserialize from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidPayload(e.to_string()))
    }
}
