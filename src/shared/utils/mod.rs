pub mod logger;
pub mod naming;
