//! Seams between crates.

mod redactor;

pub use redactor::IRedactor;
