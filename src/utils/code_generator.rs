//! Short code generation and validation.
//!
//! Codes are drawn uniformly at random from the 62-character alphanumeric
//! alphabet. The generator pre-checks candidates against the link store;
//! that check is an optimization only, the store's uniqueness constraint
//! remains authoritative.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Base62 alphabet used for generated codes.
const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Code generation and custom-code validation policy.
#[derive(Debug, Clone)]
pub struct CodePolicy {
    /// Length of generated codes before any collision-driven growth.
    pub default_length: usize,
    /// Hard ceiling on generated code length. Exceeding it is
    /// [`AppError::CapacityExceeded`].
    pub max_length: usize,
    /// Random draws attempted at each length before growing.
    pub attempts_per_length: u32,
    /// Minimum accepted custom code length.
    pub custom_min_length: usize,
    /// Maximum accepted custom code length.
    pub custom_max_length: usize,
}

impl Default for CodePolicy {
    fn default() -> Self {
        Self {
            default_length: 6,
            max_length: 64,
            attempts_per_length: 10,
            custom_min_length: 3,
            custom_max_length: 20,
        }
    }
}

/// Collision-avoiding short code generator.
///
/// Holds its own RNG so randomness is injected rather than ambient; tests
/// construct it with a fixed seed for reproducible output.
pub struct CodeGenerator {
    rng: Mutex<StdRng>,
    policy: CodePolicy,
}

impl CodeGenerator {
    /// Creates a generator seeded from the operating system.
    pub fn new(policy: CodePolicy) -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
            policy,
        }
    }

    /// Creates a deterministic generator from a fixed seed.
    pub fn with_seed(policy: CodePolicy, seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            policy,
        }
    }

    pub fn policy(&self) -> &CodePolicy {
        &self.policy
    }

    /// Generates a code that does not collide with any stored one.
    ///
    /// Attempts `attempts_per_length` independent draws at the default
    /// length, checking each against the store; when all collide, grows the
    /// length by one with a fresh attempt budget. 62^length outpaces any
    /// realistic link volume, so growth past a step or two is astronomically
    /// rare, but it is supported up to `max_length`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CapacityExceeded`] when `max_length` is exceeded,
    /// or [`AppError::StoreUnavailable`] if an existence check fails.
    pub async fn generate(&self, links: &dyn LinkRepository) -> Result<String, AppError> {
        let mut length = self.policy.default_length;

        loop {
            for _ in 0..self.policy.attempts_per_length {
                let candidate = self.draw(length);

                if links.find_by_code(&candidate).await?.is_none() {
                    return Ok(candidate);
                }
            }

            length += 1;
            if length > self.policy.max_length {
                return Err(AppError::CapacityExceeded);
            }
        }
    }

    /// Draws one uniformly random code of exactly `length` characters.
    fn draw(&self, length: usize) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());

        (0..length)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }

    /// Validates a user-supplied custom short code.
    ///
    /// Pure check, no store access: non-empty, length within the configured
    /// bounds, and every character alphanumeric, `-`, or `_`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidCustomCode`] describing the violated rule.
    pub fn validate_custom_code(&self, code: &str) -> Result<(), AppError> {
        if code.is_empty() {
            return Err(AppError::InvalidCustomCode(
                "custom code must not be empty".to_string(),
            ));
        }

        let (min, max) = (self.policy.custom_min_length, self.policy.custom_max_length);
        if code.len() < min || code.len() > max {
            return Err(AppError::InvalidCustomCode(format!(
                "custom code must be {min}-{max} characters, got {}",
                code.len()
            )));
        }

        if !code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(AppError::InvalidCustomCode(
                "custom code may only contain letters, digits, '-' and '_'".to_string(),
            ));
        }

        Ok(())
    }
}
