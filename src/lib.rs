pub mod application;
pub mod config;
pub mod infrastructure;
pub mod presentation;
