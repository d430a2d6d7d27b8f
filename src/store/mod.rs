//! In-memory phonebook store.
//!
//! # Data Flow
//! ```text
//! HTTP handler
//!     → SharedStore (Arc<RwLock<..>>, one lock scope per operation)
//!     → collection.rs (list / get / create / remove)
//!     → id.rs (next id from the high-water mark)
//!     → person.rs (record + creation payload)
//! ```
//!
//! # Design Decisions
//! - Records are kept in insertion order in a `Vec`; lookups are linear scans
//! - Ids are integers internally and strings on the wire
//! - Ids come from a monotonic counter, so deleted ids are never reissued
//! - The store itself is not synchronized; callers share it through `SharedStore`

pub mod collection;
pub mod id;
pub mod person;

use std::sync::Arc;
use tokio::sync::RwLock;

pub use collection::{PersonStore, StoreError};
pub use id::{IdGenerator, PersonId};
pub use person::{NewPerson, Person};

/// Store handle shared between request handlers.
pub type SharedStore = Arc<RwLock<PersonStore>>;
