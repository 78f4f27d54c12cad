//! # Syndic Engine
//!
//! The deterministic core of the Syndic condominium administration client.
//!
//! This crate holds the logic that is independent of any transport or UI:
//! the user roster, the local patch rules that keep it consistent with a
//! remote directory, and a generic ordering engine for table views.
//!
//! ## Design Principles
//!
//! - **No IO**: the engine has no knowledge of HTTP, files, or platform
//! - **Deterministic**: the same inputs always produce the same outputs
//! - **Testable**: pure logic, no mocks needed
//! - **Single writer**: the roster is mutated only through its own methods,
//!   and every mutation replaces the whole sequence
//!
//! ## Core Concepts
//!
//! ### Users
//!
//! The roster holds [`User`] entities: residents and administrators of a
//! condominium, each with a stable id, a [`Role`], a [`Status`], assigned
//! house numbers, and free-form observations.
//!
//! ### Roster
//!
//! The [`Roster`] is the single client-held collection. It is replaced
//! wholesale by a fetch, patched per-entity by the authoritative echo of an
//! update, or patched predictively for house assignment and removal. Each
//! mutation swaps in a fresh sequence and bumps a revision counter, so
//! consumers detect changes cheaply.
//!
//! ### Ordering
//!
//! [`ordering::sort`] produces an ordered view of any record collection from
//! a declarative [`SortConfig`], without mutating the input. Callers supply
//! a per-field accessor returning a [`SortValue`]; absent values always sort
//! last, regardless of direction.
//!
//! ### Operation status
//!
//! [`OpStatus`] models the `Idle -> Pending -> {Succeeded, Failed}` life of
//! a remote operation. Every `begin` bumps a generation counter; completions
//! carrying a stale generation are ignored, so a slow response can never
//! overwrite the outcome of a newer operation.
//!
//! ## Quick Start
//!
//! ```rust
//! use syndic_engine::{
//!     ordering::{self, SortConfig, SortDirection},
//!     Role, Roster, Status, User, UserField,
//! };
//!
//! // 1. Populate a roster from a listing
//! let mut roster = Roster::new();
//! roster.replace_all(vec![
//!     User::new("u1", Role::Tenant, Status::Active, 1706745600000),
//!     User::new("u2", Role::Owner, Status::Active, 1706745600000),
//! ]);
//!
//! // 2. Patch it locally
//! roster.assign_house("u1", 101).unwrap();
//! assert_eq!(roster.get("u1").unwrap().houses, vec![101]);
//!
//! // 3. Derive an ordered view
//! let config = SortConfig::new(UserField::Name, SortDirection::Ascending);
//! let view = ordering::sort(roster.users(), &config, User::sort_value);
//! assert_eq!(view.len(), 2);
//! ```

pub mod error;
pub mod ordering;
pub mod roster;
pub mod status;
pub mod user;

// Re-export main types at crate root
pub use error::Error;
pub use ordering::{SortConfig, SortDirection, SortValue};
pub use roster::Roster;
pub use status::{OpPhase, OpStatus};
pub use user::{Role, Status, User, UserField, HOUSE_MAX, HOUSE_MIN};

/// Type aliases for clarity
pub type UserId = String;
pub type HouseNumber = u32;
pub type Timestamp = u64;
pub type Revision = u64;
pub type Generation = u64;
