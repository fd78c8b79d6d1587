use crate::variant::BuildVariant;
use crate::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One source file compiled independently to one object file.
///
/// When `object` is omitted, the object file name is derived from the
/// unit name. Unit-specific definitions are appended after the shared
/// and variant ones, never interleaved or deduplicated.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Unit {
	pub name: String,
	pub source: String,
	#[serde(default)]
	pub object: Option<String>,
	#[serde(default)]
	pub definitions: Vec<String>,
}

/// Per-variant overrides. The debug and release manifests of the
/// original build differed only in these three fields.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct VariantSettings {
	#[serde(default)]
	pub object_dir: Option<String>,
	#[serde(default)]
	pub flags: Vec<String>,
	#[serde(default)]
	pub definitions: Vec<String>,
}

/// One binary resource to be converted to a generated source header.
#[derive(Debug, Eq, PartialEq)]
pub struct AssetJob {
	pub input_path: String,
	pub output_path: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AssetSettings {
	#[serde(default = "default_converter")]
	pub converter: String,
	#[serde(default = "default_source_dir")]
	pub source_dir: String,
	#[serde(default = "default_generated_dir")]
	pub generated_dir: String,
	#[serde(default = "default_extension")]
	pub extension: String,
	#[serde(default)]
	pub resources: Vec<String>,
}

impl AssetSettings {
	/// One job per resource identifier, declared order. Input is
	/// `<source-dir>/<id>.<ext>`, output `<generated-dir>/<id>_<ext>.h`.
	pub fn jobs(&self) -> Vec<AssetJob> {
		self.resources
			.iter()
			.map(|resource| AssetJob {
				input_path: format!("{}/{}.{}", self.source_dir, resource, self.extension),
				output_path: format!("{}/{}_{}.h", self.generated_dir, resource, self.extension),
			})
			.collect()
	}
}

impl Default for AssetSettings {
	fn default() -> Self {
		AssetSettings {
			converter: default_converter(),
			source_dir: default_source_dir(),
			generated_dir: default_generated_dir(),
			extension: default_extension(),
			resources: Vec::new(),
		}
	}
}

fn default_compiler() -> String {
	"gcc".to_string()
}

fn default_converter() -> String {
	"bin2c".to_string()
}

fn default_source_dir() -> String {
	"images".to_string()
}

fn default_generated_dir() -> String {
	"images/gen".to_string()
}

fn default_extension() -> String {
	"png".to_string()
}

/// The declarative build manifest. Immutable once loaded.
///
/// Units and every flag/definition/library list are ordered; iteration
/// order is declaration order, which makes the emitted plan
/// reproducible. Library order is link-order-sensitive and preserved
/// verbatim.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Manifest {
	#[serde(default = "default_compiler")]
	pub compiler: String,
	#[serde(default)]
	pub include_dirs: Vec<String>,
	/// Flags shared by the compile and link phases.
	#[serde(default)]
	pub common_flags: Vec<String>,
	/// Compile-phase flags, appended after the common ones.
	#[serde(default)]
	pub compile_flags: Vec<String>,
	/// Link-phase flags, appended after the common ones.
	#[serde(default)]
	pub link_flags: Vec<String>,
	/// Preprocessor definitions shared by every unit.
	#[serde(default)]
	pub definitions: Vec<String>,
	#[serde(default)]
	pub link_dirs: Vec<String>,
	#[serde(default)]
	pub libraries: Vec<String>,
	#[serde(default)]
	pub output: String,
	#[serde(default)]
	pub units: Vec<Unit>,
	#[serde(default)]
	pub debug: VariantSettings,
	#[serde(default)]
	pub release: VariantSettings,
	#[serde(default)]
	pub assets: AssetSettings,
}

impl Manifest {
	pub fn load(path: &Path) -> Result<Self> {
		let contents = fs::read_to_string(path).map_err(|err| Error::failed_to_read(path, err))?;
		let manifest: Manifest = serde_yaml::from_str(&contents)
			.map_err(|err| Error::failed_to_deserialize(&contents, err))?;
		Ok(manifest)
	}

	pub fn variant_settings(&self, variant: BuildVariant) -> &VariantSettings {
		match variant {
			BuildVariant::Debug => &self.debug,
			BuildVariant::Release => &self.release,
		}
	}
}
