//! User collaborator entity (consumed fields only)

/// A user record, as seen by the booking core. Used only for identity
/// checks and the booker summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}
