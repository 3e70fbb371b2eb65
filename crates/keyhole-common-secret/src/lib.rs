// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Secret wrapper type that prevents accidental logging of sensitive values.
//!
//! [`SecretString`] owns a string and redacts it from `Debug` and `Display`
//! output, so credentials cannot leak through log statements or error
//! formatting. The backing memory is zeroized when the value is dropped.
//!
//! There is no serde support: wire types that carry secrets deserialize
//! into [`SecretString`] through an explicit helper at the call site, so
//! every path a secret can travel is visible in review.
//!
//! # Example
//!
//! ```
//! use keyhole_common_secret::SecretString;
//!
//! let secret = SecretString::new("hunter2");
//! assert_eq!(secret.expose(), "hunter2");
//! assert_eq!(format!("{secret:?}"), "SecretString([REDACTED])");
//! ```

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Placeholder emitted wherever a secret would otherwise be printed.
const REDACTED: &str = "[REDACTED]";

/// An owned string whose value is hidden from `Debug`/`Display` and wiped
/// from memory on drop.
///
/// Use this for credentials the process holds (client secrets, access
/// tokens). Payload values a caller is entitled to read back do not belong
/// in this wrapper.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretString(String);

impl SecretString {
	/// Wrap a sensitive value.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Access the underlying value.
	///
	/// Call sites of this method are the complete set of places a secret
	/// can leave the wrapper; keep them few and deliberate.
	pub fn expose(&self) -> &str {
		&self.0
	}
}

impl From<String> for SecretString {
	fn from(value: String) -> Self {
		Self(value)
	}
}

impl From<&str> for SecretString {
	fn from(value: &str) -> Self {
		Self(value.to_string())
	}
}

impl PartialEq for SecretString {
	fn eq(&self, other: &Self) -> bool {
		self.0 == other.0
	}
}

impl Eq for SecretString {}

impl std::fmt::Debug for SecretString {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "SecretString({REDACTED})")
	}
}

impl std::fmt::Display for SecretString {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(REDACTED)
	}
}


#[cfg(test)]
mod proptests {
	use super::*;
	use proptest::prelude::*;

	proptest! {
		/// The wrapped value must never appear in Debug or Display output.
		#[test]
		fn secret_never_in_debug_or_display(value in "[a-zA-Z0-9]{8,64}") {
			prop_assume!(!value.contains("REDACTED"));
			prop_assume!(!value.contains("Secret"));

			let secret = SecretString::new(value.clone());
			let debug = format!("{secret:?}");
			let display = format!("{secret}");

			prop_assert!(!debug.contains(&value));
			prop_assert!(!display.contains(&value));
		}

		/// expose() always returns exactly what was wrapped.
		#[test]
		fn expose_roundtrips(value in ".*") {
			let secret = SecretString::new(value.clone());
			prop_assert_eq!(secret.expose(), value.as_str());
		}

		/// Equality follows the wrapped value, not the wrapper identity.
		#[test]
		fn equality_follows_inner_value(value in "[a-zA-Z0-9]{1,32}") {
			let a = SecretString::new(value.clone());
			let b = SecretString::new(value);
			prop_assert_eq!(a, b);
		}
	}
}
