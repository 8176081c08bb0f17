//! Service layer for userdir
//!
//! The service layer provides business logic on top of the storage layer:
//! user CRUD with audit synthesis, and ordered access to the audit trail.

pub mod audit_log;
pub mod user;

pub use audit_log::AuditLogService;
pub use user::UserService;
