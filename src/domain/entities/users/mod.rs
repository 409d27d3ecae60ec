//! Users Entity Module

pub mod user;
pub mod field_mask;

pub use user::{Geolocation, NewUser, User};
pub use field_mask::{UpdateMask, UserField, UserPatch};
