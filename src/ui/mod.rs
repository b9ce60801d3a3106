pub mod error;
pub mod json;
pub mod output;
pub mod terminal;
