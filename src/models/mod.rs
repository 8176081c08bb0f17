//! Core data models for userdir
//!
//! The person record and the strongly-typed identifiers shared with the
//! audit trail.

pub mod ids;
pub mod user;

pub use ids::{LogId, UserId};
pub use user::User;
