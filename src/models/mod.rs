pub mod user;

pub use user::{CreatedUser, NewUser, User};
