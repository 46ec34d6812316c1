//! Password health library
//!
//! This library evaluates how healthy a password is (length and character
//! variety) and generates randomized passwords guaranteed to contain
//! characters from every class.
//!
//! # Features
//!
//! - `async` (default): Enables async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `cli`: Builds the `pwd-health` command-line front-end
//!
//! # Example
//!
//! ```rust
//! use pwd_health::{evaluate_password_strength, generate_password};
//! use secrecy::SecretString;
//!
//! // Evaluate a password
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let evaluation = evaluate_password_strength(&password)?;
//!
//! println!("Length score: {}", evaluation.length_score_percent());
//! println!("Complexity score: {}", evaluation.complexity_score_percent());
//!
//! // Or generate a healthy one
//! let generated = generate_password();
//! assert!(generated.len() >= 14);
//! # Ok::<(), pwd_health::EvaluationError>(())
//! ```

// Internal modules
mod alphabet;
mod evaluator;
mod generator;
mod sections;
mod types;

// Public API
pub use alphabet::{CharClass, DIGITS, LOWERCASE, SYMBOLS, UPPERCASE};
pub use evaluator::{EvaluationError, evaluate_password_strength};
pub use generator::{MAX_BACKFILL, MAX_LENGTH, MIN_LENGTH, generate_password, generate_password_with};
pub use types::{LengthTier, PasswordEvaluation};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_strength_tx;
