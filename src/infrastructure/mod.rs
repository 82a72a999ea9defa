//! External concerns: storage and the persisted session slot

pub mod session_slot;
pub mod storage;

pub use session_slot::{FileSessionSlot, InMemorySessionSlot, SessionSlot, SESSION_SLOT_KEY};
pub use storage::{demo_roster, InMemoryEmployeeRepository};
