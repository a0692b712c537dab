pub mod catalog;
pub mod graph;
pub mod lists;
pub mod upstream;
