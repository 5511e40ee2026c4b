//! Utility functions

use rand::Rng;

pub const ID_LENGTH: usize = 24;

const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generate an opaque entity id: 24 random base62 characters.
pub fn random_id() -> Box<str> {
	let mut rng = rand::rng();
	let mut id = String::with_capacity(ID_LENGTH);

	for _ in 0..ID_LENGTH {
		id.push(ALPHABET[rng.random_range(0..ALPHABET.len())] as char);
	}
	id.into_boxed_str()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_random_id_shape() {
		let id = random_id();
		assert_eq!(id.len(), ID_LENGTH);
		assert!(id.bytes().all(|b| ALPHABET.contains(&b)));
	}

	#[test]
	fn test_random_id_unique() {
		// collisions over a 62^24 space would point at a broken generator
		let a = random_id();
		let b = random_id();
		assert_ne!(a, b);
	}
}

// vim: ts=4
