pub mod config_types;
pub mod configuration;
