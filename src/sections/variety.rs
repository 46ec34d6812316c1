//! Character variety section - counts the distinct character classes present.

use secrecy::{ExposeSecret, SecretString};

use super::SectionScore;
use crate::alphabet::CharClass;

/// Counts how many of the four character classes appear at least once.
///
/// Only presence feeds the score; how often a class occurs does not matter.
///
/// # Returns
/// The number of distinct classes present, `0` to `4`.
pub fn character_variety_section(password: &SecretString) -> SectionScore {
    let mut present = [false; CharClass::ALL.len()];
    for c in password.expose_secret().chars() {
        present[CharClass::of(c) as usize] = true;
    }
    present.iter().filter(|&&p| p).count() as SectionScore
}
