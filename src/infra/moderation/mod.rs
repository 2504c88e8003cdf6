// Implementations for the warning ledger.

pub mod in_memory;

pub use in_memory::InMemoryWarningStore;
