// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Logging configuration section.

use serde::{Deserialize, Serialize};

fn default_level() -> String {
	"info,tower_http::trace=debug,reqwest=debug,hyper=debug".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfigLayer {
	pub level: Option<String>,
}

impl LoggingConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.level.is_some() {
			self.level = other.level;
		}
	}

	pub fn finalize(self) -> LoggingConfig {
		LoggingConfig {
			level: self.level.unwrap_or_else(default_level),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
	/// `EnvFilter` directive string. `RUST_LOG` still wins at startup.
	pub level: String,
}

impl Default for LoggingConfig {
	fn default() -> Self {
		Self {
			level: default_level(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_values() {
		let config = LoggingConfig::default();
		assert_eq!(
			config.level,
			"info,tower_http::trace=debug,reqwest=debug,hyper=debug"
		);
	}

	#[test]
	fn test_layer_finalize_defaults() {
		let layer = LoggingConfigLayer::default();
		let config = layer.finalize();
		assert_eq!(
			config.level,
			"info,tower_http::trace=debug,reqwest=debug,hyper=debug"
		);
	}

	#[test]
	fn test_layer_finalize_with_values() {
		let layer = LoggingConfigLayer {
			level: Some("debug".to_string()),
		};
		let config = layer.finalize();
		assert_eq!(config.level, "debug");
	}

	#[test]
	fn test_merge_overwrites() {
		let mut base = LoggingConfigLayer {
			level: Some("info".to_string()),
		};
		let overlay = LoggingConfigLayer {
			level: Some("warn".to_string()),
		};
		base.merge(overlay);
		assert_eq!(base.level, Some("warn".to_string()));
	}

	#[test]
	fn test_merge_keeps_base_when_overlay_empty() {
		let mut base = LoggingConfigLayer {
			level: Some("info".to_string()),
		};
		base.merge(LoggingConfigLayer::default());
		assert_eq!(base.level, Some("info".to_string()));
	}

	#[test]
	fn test_serde_roundtrip() {
		let config = LoggingConfig {
			level: "debug".to_string(),
		};
		let toml_str = toml::to_string(&config).unwrap();
		let parsed: LoggingConfig = toml::from_str(&toml_str).unwrap();
		assert_eq!(config, parsed);
	}

	#[test]
	fn test_deserialize_layer_empty() {
		let layer: LoggingConfigLayer = toml::from_str("").unwrap();
		assert!(layer.level.is_none());
	}

	#[test]
	fn test_deserialize_layer_partial() {
		let toml_str = r#"
level = "warn"
"#;
		let layer: LoggingConfigLayer = toml::from_str(toml_str).unwrap();
		assert_eq!(layer.level, Some("warn".to_string()));
	}
}
