//! Item collaborator entity (consumed fields only)

/// A listed item, as seen by the booking core.
///
/// Read-only context for booking decisions. Availability is an
/// owner-controlled CRUD field; the booking core never toggles it as a
/// side effect of reservation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: i64,
    /// The listing user; sole approver of bookings against this item
    pub owner_id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Whether the item accepts new bookings
    pub available: bool,
}
