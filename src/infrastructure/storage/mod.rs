mod memory;

pub use memory::{demo_roster, InMemoryEmployeeRepository};
