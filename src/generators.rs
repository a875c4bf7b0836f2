//! Random values for destination accounts: initial passwords and filler phone numbers.
//!
//! Every generator has a `*_with` variant that takes the random source explicitly,
//! so callers (and tests) can supply a seeded RNG.

use rand::Rng;
use rand::seq::SliceRandom;

pub const MIN_PASSWORD_LENGTH: usize = 6;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
pub const SPECIAL_CHARACTERS: &[u8] = b"!@#$%^&*()-_+=<>?";

/// Number of random digits after the phone prefix
pub const PHONE_DIGITS: usize = 9;

fn pick<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8]) -> u8 {
    alphabet[rng.random_range(0..alphabet.len())]
}

/// Generate a password using the thread-local RNG.
pub fn generate_password(length: usize) -> String {
    generate_password_with(&mut rand::rng(), length)
}

/// Generate a password of `max(length, 6)` characters containing at least one
/// lowercase letter, uppercase letter, digit and special character.
pub fn generate_password_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    let length = length.max(MIN_PASSWORD_LENGTH);

    let mut chars = Vec::with_capacity(length);
    chars.push(pick(rng, LOWERCASE));
    chars.push(pick(rng, UPPERCASE));
    chars.push(pick(rng, DIGITS));
    chars.push(pick(rng, SPECIAL_CHARACTERS));

    let all: Vec<u8> = [LOWERCASE, UPPERCASE, DIGITS, SPECIAL_CHARACTERS].concat();
    while chars.len() < length {
        chars.push(pick(rng, &all));
    }

    chars.shuffle(rng);

    // All alphabets are ASCII
    chars.into_iter().map(char::from).collect()
}

/// Generate a phone number using the thread-local RNG.
pub fn generate_phone_number(prefix: &str) -> String {
    generate_phone_number_with(&mut rand::rng(), prefix)
}

/// `prefix` followed by nine random decimal digits.
pub fn generate_phone_number_with<R: Rng + ?Sized>(rng: &mut R, prefix: &str) -> String {
    let mut phone = String::with_capacity(prefix.len() + PHONE_DIGITS);
    phone.push_str(prefix);
    for _ in 0..PHONE_DIGITS {
        phone.push(char::from(pick(rng, DIGITS)));
    }
    phone
}

/// Whether a source phone value can be used as-is (present and not blank).
pub fn has_usable_phone(phone: Option<&str>) -> bool {
    phone.is_some_and(|p| !p.trim().is_empty())
}
