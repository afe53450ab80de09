//! Local random alias suggestions.
//!
//! Non-cryptographic and with no uniqueness guarantee: the service decides
//! whether an alias is free. Entropy comes from a v4 UUID, which works in
//! both native and WASM builds.

#[cfg(test)]
#[path = "alias_test.rs"]
mod alias_test;

/// Characters an alias is drawn from.
pub const ALIAS_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of generated aliases.
pub const ALIAS_LEN: usize = 6;

/// Generate a fresh random alias.
pub fn generate_alias() -> String {
    alias_from_entropy(uuid::Uuid::new_v4().as_bytes())
}

/// Map up to [`ALIAS_LEN`] bytes onto [`ALIAS_ALPHABET`].
pub fn alias_from_entropy(bytes: &[u8]) -> String {
    bytes
        .iter()
        .take(ALIAS_LEN)
        .map(|b| char::from(ALIAS_ALPHABET[usize::from(*b) % ALIAS_ALPHABET.len()]))
        .collect()
}
