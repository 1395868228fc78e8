pub mod intro_controller;
pub mod payloads;
pub mod user_controller;
