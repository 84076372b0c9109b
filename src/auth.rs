//! Identity and credential inputs for provider configurations.

pub mod id;
pub mod token;

pub use id::*;
pub use token::*;
