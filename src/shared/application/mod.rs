//! Shared application layer patterns
//!
//! Result shapes used by every data source.
pub mod mutation;
pub mod pagination;

pub use mutation::{ListItemResult, MutationOutcome, StatusBody};
pub use pagination::{Envelope, Page, PageMeta};
