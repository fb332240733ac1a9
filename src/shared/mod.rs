//! Functionalities shared by the sequence types (errors, parameters)
pub mod errors;
pub mod parameters;

pub use errors::SequenceError;
pub use parameters::TranslationParameters;
