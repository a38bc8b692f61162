//! Database layer (document store).

pub mod firestore;
pub mod memory;
pub mod store;

pub use store::{DocumentStore, StoreTarget};

/// Collection names as constants.
pub mod collections {
    pub const TRAINERS: &str = "trainer";
    pub const CLASSES: &str = "gymclass";
    pub const PLANS: &str = "membershipplan";
    pub const LEADS: &str = "lead";
    pub const BOOKINGS: &str = "booking";
}
