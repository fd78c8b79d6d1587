use crate::paths::USER_SETTINGS_DIRECTORY;
use crate::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// User-wide overrides for tool locations, e.g. pointing `gcc` at a
/// cross-toolchain wrapper. Missing file means no overrides.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Configuration {
	#[serde(default)]
	pub paths: HashMap<String, PathBuf>,
}

impl Configuration {
	pub fn load() -> Result<Self> {
		let path = USER_SETTINGS_DIRECTORY.join("config.yml");

		if !path.exists() {
			return Ok(Configuration::default());
		}

		let contents = fs::read_to_string(&path).map_err(|err| Error::failed_to_read(&path, err))?;
		let configuration: Configuration = serde_yaml::from_str(&contents)
			.map_err(|err| Error::failed_to_deserialize(&contents, err))?;
		Ok(configuration)
	}

	/// Resolves a tool name to its configured path, or the bare name.
	pub fn tool(&self, name: &str) -> String {
		match self.paths.get(name) {
			Some(path) => path.to_string_lossy().to_string(),
			None => name.to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_tool_without_override() {
		let configuration = Configuration::default();
		assert_eq!(configuration.tool("gcc"), "gcc");
	}

	#[test]
	fn test_tool_with_override() {
		let mut paths = HashMap::new();
		paths.insert("gcc".to_string(), PathBuf::from("/opt/cross/bin/gcc"));
		let configuration = Configuration { paths };
		assert_eq!(configuration.tool("gcc"), "/opt/cross/bin/gcc");
		assert_eq!(configuration.tool("bin2c"), "bin2c");
	}
}
