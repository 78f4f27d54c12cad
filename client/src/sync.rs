//! The optimistic synchronizer.
//!
//! Owns the roster and the shared operation status, and wires both to the
//! remote directory. Each mutation follows the same shape: mark the status
//! pending, issue the remote call, then patch the roster locally on success
//! or record the failure. The patch is the minimal one the remote's response
//! allows:
//!
//! - role/status/observation updates replace the one entity with the
//!   server's echo
//! - house mutations apply the client's own prediction (the remote returns
//!   only a confirmation)
//! - a delete triggers one full refetch instead of a local splice
//!
//! Concurrent mutations are neither queued nor cancelled; both run. The
//! status generation counter decides ownership: a completion belonging to an
//! operation that is no longer the newest touches neither the flags nor the
//! roster. Errors are recorded for display AND returned to the caller, so
//! caller-level UI can react without re-issuing the call.

use crate::{
    directory::UserDirectory,
    error::{ClientError, Result},
};
use syndic_engine::{Generation, HouseNumber, OpStatus, Role, Roster, Status};
use tokio::sync::watch;

/// Keeps the client-held roster consistent with the remote directory.
///
/// Consumers subscribe through [`Synchronizer::roster`] and
/// [`Synchronizer::status`]; every accepted patch replaces the held
/// sequence, so a subscriber only ever observes whole states.
pub struct Synchronizer<D> {
    directory: D,
    roster: watch::Sender<Roster>,
    status: watch::Sender<OpStatus>,
}

impl<D: UserDirectory> Synchronizer<D> {
    /// Create a synchronizer with an empty roster.
    pub fn new(directory: D) -> Self {
        let (roster, _) = watch::channel(Roster::new());
        let (status, _) = watch::channel(OpStatus::new());
        Self {
            directory,
            roster,
            status,
        }
    }

    /// The remote directory this synchronizer talks to.
    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Subscribe to roster changes.
    pub fn roster(&self) -> watch::Receiver<Roster> {
        self.roster.subscribe()
    }

    /// Subscribe to loading/error changes.
    pub fn status(&self) -> watch::Receiver<OpStatus> {
        self.status.subscribe()
    }

    /// Snapshot of the current roster.
    pub fn current_roster(&self) -> Roster {
        self.roster.borrow().clone()
    }

    /// Snapshot of the current status.
    pub fn current_status(&self) -> OpStatus {
        self.status.borrow().clone()
    }

    /// Replace the whole roster with a fresh listing.
    pub async fn refresh(&self) -> Result<()> {
        let generation = self.begin();
        match self.directory.list_users().await {
            Ok(users) => {
                tracing::info!(count = users.len(), "roster refreshed");
                self.settle(generation, |roster| {
                    roster.replace_all(users);
                    Ok(())
                })
            }
            Err(err) => Err(self.reject(generation, err)),
        }
    }

    /// Change a user's role; the held entity is replaced by the echo.
    pub async fn change_role(&self, id: &str, role: Role) -> Result<()> {
        let generation = self.begin();
        match self.directory.update_role(id, role).await {
            Ok(echo) => self.settle(generation, |roster| roster.replace_user(echo)),
            Err(err) => Err(self.reject(generation, err)),
        }
    }

    /// Change a user's status; the held entity is replaced by the echo.
    pub async fn change_status(&self, id: &str, status: Status) -> Result<()> {
        let generation = self.begin();
        match self.directory.update_status(id, status).await {
            Ok(echo) => self.settle(generation, |roster| roster.replace_user(echo)),
            Err(err) => Err(self.reject(generation, err)),
        }
    }

    /// Replace a user's observations; the held entity is replaced by the
    /// echo.
    pub async fn change_observations(&self, id: &str, observations: Option<&str>) -> Result<()> {
        let generation = self.begin();
        match self.directory.update_observations(id, observations).await {
            Ok(echo) => self.settle(generation, |roster| roster.replace_user(echo)),
            Err(err) => Err(self.reject(generation, err)),
        }
    }

    /// Assign a house to a user.
    ///
    /// Validated locally first: an invalid request makes no remote call at
    /// all. On success the roster applies the predicted append itself; the
    /// remote returns only a confirmation.
    pub async fn assign_house(&self, id: &str, house: HouseNumber) -> Result<()> {
        let generation = self.begin();

        let check = self.roster.borrow().check_assign(id, house);
        if let Err(err) = check {
            return Err(self.reject(generation, err.into()));
        }

        match self.directory.assign_house(id, house).await {
            Ok(ack) => {
                tracing::debug!(user = id, house, message = %ack.message, "house assigned");
                self.settle(generation, |roster| roster.assign_house(id, house))
            }
            Err(err) => Err(self.reject(generation, err)),
        }
    }

    /// Remove a house from a user. Validated locally, predicted locally.
    pub async fn remove_house(&self, id: &str, house: HouseNumber) -> Result<()> {
        let generation = self.begin();

        let check = self.roster.borrow().check_remove(id, house);
        if let Err(err) = check {
            return Err(self.reject(generation, err.into()));
        }

        match self.directory.remove_house(id, house).await {
            Ok(ack) => {
                tracing::debug!(user = id, house, message = %ack.message, "house removed");
                self.settle(generation, |roster| roster.remove_house(id, house))
            }
            Err(err) => Err(self.reject(generation, err)),
        }
    }

    /// Delete a user.
    ///
    /// The roster is never spliced locally: a successful delete is followed
    /// by exactly one full refetch, and the fresh listing replaces the held
    /// collection wholesale.
    pub async fn remove_user(&self, id: &str) -> Result<()> {
        let generation = self.begin();

        if let Err(err) = self.directory.delete_user(id).await {
            return Err(self.reject(generation, err));
        }
        tracing::info!(user = id, "user deleted, refetching roster");

        match self.directory.list_users().await {
            Ok(users) => self.settle(generation, |roster| {
                roster.replace_all(users);
                Ok(())
            }),
            Err(err) => Err(self.reject(generation, err)),
        }
    }

    /// Mark an operation pending and take ownership of the status surface.
    fn begin(&self) -> Generation {
        let mut generation = 0;
        self.status.send_modify(|status| generation = status.begin());
        generation
    }

    /// Apply a roster patch and mark the operation succeeded.
    ///
    /// A completion that is no longer the newest is dropped whole: neither
    /// the roster nor the flags change.
    fn settle(
        &self,
        generation: Generation,
        patch: impl FnOnce(&mut Roster) -> syndic_engine::error::Result<()>,
    ) -> Result<()> {
        if self.status.borrow().generation() != generation {
            tracing::debug!(generation, "stale completion ignored");
            return Ok(());
        }

        let mut outcome = Ok(());
        self.roster.send_modify(|roster| outcome = patch(roster));

        match outcome {
            Ok(()) => {
                self.status.send_modify(|status| {
                    status.succeed(generation);
                });
                Ok(())
            }
            Err(err) => Err(self.reject(generation, err.into())),
        }
    }

    /// Record a failure (unless stale) and hand the error back to the
    /// caller.
    fn reject(&self, generation: Generation, err: ClientError) -> ClientError {
        tracing::warn!(generation, error = %err, "operation failed");
        let message = err.display_message();
        self.status.send_modify(|status| {
            status.fail(generation, message);
        });
        err
    }
}
