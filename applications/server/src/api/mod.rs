/// API route modules
pub mod health;
pub mod hello;
pub mod users;
