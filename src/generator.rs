//! Healthy password generator.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::alphabet::CharClass;

/// Shortest password the generator produces.
pub const MIN_LENGTH: usize = 14;

/// Longest initial draw; backfill may add up to [`MAX_BACKFILL`] characters
/// per missing class on top of this.
pub const MAX_LENGTH: usize = 21;

/// Upper bound on backfill characters appended per missing class.
pub const MAX_BACKFILL: usize = 4;

/// Generates a healthy password using the thread-local RNG.
///
/// `rand::thread_rng()` is cryptographically secure, so the output is
/// suitable for real credentials.
pub fn generate_password() -> String {
    generate_password_with(&mut rand::thread_rng())
}

/// Generates a healthy password from the provided random source.
///
/// Draws a target length in `[14, 21]`, then for every position picks one of
/// the four character classes uniformly and a uniform character from that
/// class. Classes that never came up are backfilled with one to four extra
/// characters each, so all four classes appear in the result. The
/// accumulated characters are shuffled to remove positional bias from the
/// class-then-backfill construction.
///
/// Accepting the RNG makes generation deterministic under a seeded source,
/// which the tests rely on.
pub fn generate_password_with<R: Rng>(rng: &mut R) -> String {
    let length = rng.gen_range(MIN_LENGTH..=MAX_LENGTH);
    let mut password: Vec<u8> = Vec::with_capacity(length + CharClass::ALL.len() * MAX_BACKFILL);
    let mut present = [false; CharClass::ALL.len()];

    for _ in 0..length {
        let class = CharClass::ALL[rng.gen_range(0..CharClass::ALL.len())];
        let set = class.charset();
        password.push(set[rng.gen_range(0..set.len())]);
        present[class as usize] = true;
    }

    for class in CharClass::ALL {
        if !present[class as usize] {
            let set = class.charset();
            let count = rng.gen_range(1..=MAX_BACKFILL);
            for _ in 0..count {
                password.push(set[rng.gen_range(0..set.len())]);
            }
        }
    }

    password.shuffle(rng);
    password.into_iter().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    // With >= 14 positions at least one class always comes up, so at most
    // three classes can need backfill.
    const MAX_TOTAL_LENGTH: usize = MAX_LENGTH + (CharClass::ALL.len() - 1) * MAX_BACKFILL;

    #[test]
    fn test_generated_characters_stay_inside_the_alphabet() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..1000 {
            let password = generate_password_with(&mut rng);
            assert!(password.len() >= MIN_LENGTH, "too short: {password}");
            for c in password.chars() {
                assert!(
                    CharClass::of(c).charset().contains(&(c as u8)),
                    "character {c} outside the alphabet in {password}"
                );
            }
        }
    }

    #[test]
    fn test_generated_length_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            let password = generate_password_with(&mut rng);
            assert!(
                (MIN_LENGTH..=MAX_TOTAL_LENGTH).contains(&password.len()),
                "length {} out of bounds",
                password.len()
            );
        }
    }

    #[test]
    fn test_every_class_appears_in_generated_output() {
        let mut rng = ChaCha8Rng::seed_from_u64(1234);
        for _ in 0..200 {
            let password = generate_password_with(&mut rng);
            for class in CharClass::ALL {
                assert!(
                    password.chars().any(|c| CharClass::of(c) == class),
                    "missing {class:?} in {password}"
                );
            }
        }
    }

    #[test]
    fn test_same_seed_produces_same_password() {
        let a = generate_password_with(&mut ChaCha8Rng::seed_from_u64(5));
        let b = generate_password_with(&mut ChaCha8Rng::seed_from_u64(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_thread_rng_wrapper() {
        let password = generate_password();
        assert!((MIN_LENGTH..=MAX_TOTAL_LENGTH).contains(&password.len()));
        assert!(password.is_ascii());
    }
}
