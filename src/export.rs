use crate::plan::BuildPlan;
use crate::{Error, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// One `compile_commands.json` entry, the clang tooling schema.
#[derive(Debug, Serialize)]
pub struct DatabaseEntry {
	pub directory: String,
	pub arguments: Vec<String>,
	pub file: String,
	pub output: String,
}

pub fn database_entries(plan: &BuildPlan, directory: &str) -> Vec<DatabaseEntry> {
	plan.compile_commands()
		.into_iter()
		.map(|command| DatabaseEntry {
			directory: directory.to_string(),
			arguments: command.args,
			file: command.source_path,
			output: command.object_path,
		})
		.collect()
}

pub fn write_database(plan: &BuildPlan, directory: &str, path: &Path) -> Result<()> {
	let entries = database_entries(plan, directory);
	let contents = serde_json::to_string_pretty(&entries)
		.map_err(|err| Error::failed_to_serialize("compilation database", err))?;
	fs::write(path, contents).map_err(|err| Error::failed_to_write(path, err))?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::configuration::Configuration;
	use crate::manifest::Manifest;
	use crate::variant::BuildVariant;

	#[test]
	fn test_database_entries() {
		let manifest: Manifest = serde_yaml::from_str(
			r#"
compile-flags: ["-c"]
output: prog
units:
  - name: a
    source: a.c
    object: a.o
"#,
		)
		.unwrap();
		let plan = BuildPlan::new(&manifest, BuildVariant::Release, &Configuration::default());

		let entries = database_entries(&plan, ".");
		assert_eq!(entries.len(), 1);
		assert_eq!(entries[0].directory, ".");
		assert_eq!(entries[0].file, "a.c");
		assert_eq!(entries[0].output, "a.o");
		assert_eq!(entries[0].arguments, vec!["gcc", "-c", "-o", "a.o", "a.c"]);

		let json = serde_json::to_value(&entries).unwrap();
		assert_eq!(json[0]["arguments"][0], "gcc");
		assert_eq!(json[0]["file"], "a.c");
	}
}
