//! Password scoring sections
//!
//! Each section scores a specific aspect of password strength.

mod length;
mod variety;

pub use length::{LENGTH_BUCKETS, length_section};
pub use variety::character_variety_section;

/// Raw score produced by a section, before the evaluator normalizes it
/// into `[0, 1]`.
pub type SectionScore = u32;
