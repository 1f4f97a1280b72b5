//! Token generation
//!
//! [`TokenGenerator`] hosts three groups of operations:
//! - random symbol strings over the base64 and base62 alphabets
//! - zero-padded four and six digit numeric codes
//! - UUIDs and hyphen-free trace ids

mod alphabet;
mod generator;
mod symbols;
mod numeric;
mod identifier;

pub use alphabet::Alphabet;
pub use generator::{TokenGenerator, default_generator};
