//! External identity → storage key.
//!
//! Identity providers issue ids like `user_2abC9xk1`. Storage keys are integers,
//! so the key is built from the decimal digits of the id: non-digits are
//! dropped, at most [`MAX_KEY_DIGITS`] digits are kept (left to right) and the
//! result is read as a base-10 number. Leading zeros vanish, so
//! `user_0000123abc` becomes `123`.

use crate::contract::model::ProfileKey;
use crate::domain::error::DomainError;

/// Digits kept from an external identity.
pub const MAX_KEY_DIGITS: usize = 10;

/// Derive the storage key for an external identity.
///
/// Fails with [`DomainError::InvalidIdentity`] when the identity carries no
/// ASCII digit at all. Two different identities may share a key if their
/// leading digits agree.
pub fn normalize(external_id: &str) -> Result<ProfileKey, DomainError> {
    let mut digits = external_id
        .chars()
        .filter_map(|c| c.to_digit(10))
        .take(MAX_KEY_DIGITS)
        .peekable();

    if digits.peek().is_none() {
        return Err(DomainError::invalid_identity(external_id));
    }

    let value = digits.fold(0u64, |acc, d| acc * 10 + u64::from(d));
    Ok(ProfileKey::new(value))
}
