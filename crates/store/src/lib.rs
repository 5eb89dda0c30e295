//! View-state container for the roster editor.
//!
//! All mutable state of a page session lives in one [`RosterStore`]: the
//! authoritative record set, the search query, the expansion mark, an
//! exclusive edit session, and the pending delete confirmation. Everything
//! the presentation layer displays is either owned here or derived here;
//! there is no hidden mutation outside the store's operations.
//!
//! Single-threaded and synchronous by design: each operation runs to
//! completion (derived state included) before the next is accepted.

pub mod session;
pub mod store;

pub use session::{EditSession, FieldEdit, StagedFields};
pub use store::RosterStore;
