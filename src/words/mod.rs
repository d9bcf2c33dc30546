// Public API
pub use bank::{WordBank, WordBankError};
pub use models::VocabEntry;

// Internal modules
mod bank;
mod models;
