//! Computed fields of the catalog and list types
mod account;
mod media;
mod movie;
mod person;
mod season;
mod show;
