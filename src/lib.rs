//! Password generation and strength scoring library
//!
//! This library generates random passwords that satisfy a character-class
//! policy and scores password strength with a fixed additive rubric.
//!
//! # Features
//!
//! - `async` (default): Enables the tokio worker pool for batches
//! - `tracing`: Enables logging via tracing crate
//! - `cli`: Builds the `pwd-forge` command line tool
//!
//! # Environment Variables
//!
//! See [`Settings::from_env`]: `PWD_FORGE_WORKERS`, `PWD_FORGE_RNG`,
//! `PWD_FORGE_SEED`, `PWD_FORGE_BATCH_PATH`, `PWD_FORGE_LENGTH`.
//!
//! # Example
//!
//! ```rust
//! use pwd_forge::{GenerationPolicy, RandomSource, Strength, generate, score};
//! use secrecy::ExposeSecret;
//!
//! // Pick the randomness source explicitly; `Secure` draws from the OS
//! let mut rng = RandomSource::Secure.rng();
//!
//! let password = generate(&GenerationPolicy::with_length(16), &mut *rng).unwrap();
//! assert_eq!(password.expose_secret().len(), 16);
//!
//! let report = score(&password);
//! assert_eq!(report.classification, Strength::VeryStrong);
//! ```

mod batch;
mod charset;
mod config;
mod error;
mod evaluator;
mod generator;
mod random;
mod sections;
mod types;

#[cfg(feature = "async")]
pub mod pool;

// Public API
pub use batch::{ensure_sample_file, read_passwords};
pub use charset::CharClass;
pub use config::Settings;
pub use error::{BatchError, ConfigError, PolicyError};
pub use evaluator::score;
pub use generator::{classes_in, generate, generate_and_score};
pub use random::RandomSource;
pub use types::{GenerationPolicy, Password, Strength, StrengthReport};

#[cfg(feature = "async")]
pub use error::PoolError;
