// Library exports for the fitness-coach CLI
// This allows testing of internal modules

pub mod api;
pub mod commands;
pub mod config;
