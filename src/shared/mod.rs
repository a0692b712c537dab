// Shared kernel: concerns used by every bounded context

pub mod application; // Pagination envelope, mutation outcomes
pub mod domain; // Session identity, shared value objects
pub mod errors; // Shared error types
pub mod infrastructure; // Configuration
pub mod utils; // Logging, naming transform
