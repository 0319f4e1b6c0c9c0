//! Domain types

mod user;

pub use user::{Profile, User};
