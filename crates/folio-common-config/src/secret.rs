// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Secret wrapper type that prevents accidental logging of sensitive values.
//!
//! [`Secret<T>`] holds a value whose `Debug`, `Display`, and `Serialize`
//! output is always the [`REDACTED`] marker. The underlying value is only
//! reachable through an explicit [`Secret::expose`] call, which keeps leaks
//! grep-able. String contents are zeroized when the wrapper is dropped.

use std::fmt;

use zeroize::Zeroize;

/// Marker emitted wherever a secret would otherwise appear in output.
pub const REDACTED: &str = "[REDACTED]";

/// Wrapper for sensitive values (API keys, tokens, passwords).
///
/// The wrapped value never appears in `Debug`/`Display` formatting or in
/// serialized output. Call [`Secret::expose`] at the single point where the
/// raw value is genuinely needed.
pub struct Secret<T: Zeroize> {
	value: T,
}

/// The common case: a secret string such as an API key.
pub type SecretString = Secret<String>;

impl<T: Zeroize> Secret<T> {
	/// Wrap a sensitive value.
	pub fn new(value: T) -> Self {
		Self { value }
	}

	/// Access the wrapped value.
	///
	/// Every call site of this method is a place the secret escapes the
	/// wrapper; keep the borrow as short-lived as possible.
	pub fn expose(&self) -> &T {
		&self.value
	}
}

impl<T: Zeroize> Drop for Secret<T> {
	fn drop(&mut self) {
		self.value.zeroize();
	}
}

impl<T: Zeroize + Clone> Clone for Secret<T> {
	fn clone(&self) -> Self {
		Self {
			value: self.value.clone(),
		}
	}
}

impl<T: Zeroize> fmt::Debug for Secret<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(REDACTED)
	}
}

impl<T: Zeroize> fmt::Display for Secret<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(REDACTED)
	}
}

#[cfg(feature = "serde")]
impl<T: Zeroize> serde::Serialize for Secret<T> {
	/// Serializes as the redaction marker, never the wrapped value.
	///
	/// Configs containing secrets can therefore be dumped for debugging
	/// without leaking. Deserialization is asymmetric by intent: it reads
	/// the real value.
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_str(REDACTED)
	}
}

#[cfg(feature = "serde")]
impl<'de, T: Zeroize + serde::Deserialize<'de>> serde::Deserialize<'de> for Secret<T> {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		T::deserialize(deserializer).map(Secret::new)
	}
}
