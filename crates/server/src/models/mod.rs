//! Domain types for the server.
//!
//! These types represent validated domain objects separate from database row
//! types; repositories perform the conversion.

pub mod catalog;
pub mod session;
pub mod user;

pub use catalog::{ClothingItem, GeneratedImage};
pub use session::{CurrentUser, session_keys};
pub use user::User;
