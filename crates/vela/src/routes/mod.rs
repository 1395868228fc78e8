pub mod intro_routes;
pub mod user_routes;
