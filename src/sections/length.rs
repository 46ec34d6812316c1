//! Length section - buckets password length into discrete tiers.

use secrecy::{ExposeSecret, SecretString};

use super::SectionScore;

/// Number of length buckets; the raw tier is normalized by this.
pub const LENGTH_BUCKETS: u32 = 3;

const ADEQUATE_LENGTH: usize = 12;
const STRONG_LENGTH: usize = 16;

/// Buckets the password character count into a tier.
///
/// # Returns
/// - `0` for fewer than 12 characters
/// - `1` for 12 to 15 characters
/// - `2` for 16 characters or more
///
/// Length is measured in characters, not bytes, so multi-byte input buckets
/// the same as ASCII.
pub fn length_section(password: &SecretString) -> SectionScore {
    let len = password.expose_secret().chars().count();
    if len < ADEQUATE_LENGTH {
        0
    } else if len < STRONG_LENGTH {
        1
    } else {
        2
    }
}
