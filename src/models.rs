pub mod catalog;
pub mod project;
