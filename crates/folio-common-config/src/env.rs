// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Environment variable helpers for loading secrets.
//!
//! Secrets can be provided directly (`MY_SECRET=value`) or via a file path
//! (`MY_SECRET_FILE=/run/secrets/my-secret`), the convention used by Docker
//! and Kubernetes secret mounts. Trailing newlines in secret files are
//! stripped because most tooling writes them.

use std::env;
use std::fs;

use thiserror::Error;

use crate::secret::SecretString;

/// Errors from reading a secret out of the environment.
#[derive(Debug, Error)]
pub enum SecretEnvError {
	/// Both the direct variable and its `_FILE` companion are set.
	#[error("both {var} and {var}_FILE are set; set only one")]
	Conflict { var: String },

	/// The path named by the `_FILE` variable could not be read.
	#[error("failed to read {var}_FILE path {path}: {source}")]
	File {
		var: String,
		path: String,
		#[source]
		source: std::io::Error,
	},

	/// The variable exists but holds non-unicode data.
	#[error("{var} contains non-unicode data")]
	NotUnicode { var: String },
}

/// Errors from [`require_secret_env`].
#[derive(Debug, Error)]
pub enum RequiredSecretError {
	/// Neither the variable nor its `_FILE` companion is set.
	#[error("required secret {var} is not set (checked {var} and {var}_FILE)")]
	Missing { var: String },

	#[error(transparent)]
	Load(#[from] SecretEnvError),
}

/// Load an optional secret from `var` or `var_FILE`.
///
/// Returns `Ok(None)` when neither variable is set. Setting both is an
/// error so that a stale direct value can never shadow a mounted secret
/// file or vice versa.
pub fn load_secret_env(var: &str) -> Result<Option<SecretString>, SecretEnvError> {
	let file_var = format!("{var}_FILE");
	let direct = read_env(var)?;
	let file_path = read_env(&file_var)?;

	match (direct, file_path) {
		(Some(_), Some(_)) => Err(SecretEnvError::Conflict {
			var: var.to_string(),
		}),
		(Some(value), None) => Ok(Some(SecretString::new(value))),
		(None, Some(path)) => {
			let contents = fs::read_to_string(&path).map_err(|source| SecretEnvError::File {
				var: var.to_string(),
				path: path.clone(),
				source,
			})?;
			let value = contents.trim_end_matches(['\r', '\n']).to_string();
			Ok(Some(SecretString::new(value)))
		}
		(None, None) => Ok(None),
	}
}

/// Load a secret that must be present.
pub fn require_secret_env(var: &str) -> Result<SecretString, RequiredSecretError> {
	load_secret_env(var)?.ok_or_else(|| RequiredSecretError::Missing {
		var: var.to_string(),
	})
}

fn read_env(var: &str) -> Result<Option<String>, SecretEnvError> {
	match env::var(var) {
		Ok(value) => Ok(Some(value)),
		Err(env::VarError::NotPresent) => Ok(None),
		Err(env::VarError::NotUnicode(_)) => Err(SecretEnvError::NotUnicode {
			var: var.to_string(),
		}),
	}
}
