use crate::command_line;
use crate::configuration::Configuration;
use crate::manifest::{Manifest, Unit};
use crate::variant::BuildVariant;
use std::path::Path;

/// One compile invocation together with the paths it touches, so the
/// compilation database can be derived without re-parsing arguments.
pub struct CompileCommand {
	pub args: Vec<String>,
	pub source_path: String,
	pub object_path: String,
}

/// The manifest driver: resolves one variant of the manifest into the
/// ordered command sequence "compile every unit, then link".
///
/// Everything here is a pure transform of the manifest; emission is
/// the caller's concern.
pub struct BuildPlan<'a> {
	manifest: &'a Manifest,
	compiler: String,
	converter: String,
	compile_flags: Vec<String>,
	link_flags: Vec<String>,
	definitions: Vec<String>,
	object_dir: Option<&'a str>,
}

impl<'a> BuildPlan<'a> {
	pub fn new(
		manifest: &'a Manifest,
		variant: BuildVariant,
		configuration: &Configuration,
	) -> Self {
		let settings = manifest.variant_settings(variant);

		let mut compile_flags = manifest.common_flags.clone();
		compile_flags.extend(manifest.compile_flags.iter().cloned());
		compile_flags.extend(settings.flags.iter().cloned());

		let mut link_flags = manifest.common_flags.clone();
		link_flags.extend(manifest.link_flags.iter().cloned());

		let mut definitions = manifest.definitions.clone();
		definitions.extend(settings.definitions.iter().cloned());

		BuildPlan {
			manifest,
			compiler: configuration.tool(&manifest.compiler),
			converter: configuration.tool(&manifest.assets.converter),
			compile_flags,
			link_flags,
			definitions,
			object_dir: settings.object_dir.as_deref(),
		}
	}

	fn object_path(&self, unit: &Unit) -> String {
		let object = match &unit.object {
			Some(object) => object.clone(),
			None => format!("{}.o", unit.name),
		};

		match self.object_dir {
			Some(dir) => {
				// Paths are assembled textually so the emitted command
				// text is identical across platforms.
				let file_name = Path::new(&object)
					.file_name()
					.map(|name| name.to_string_lossy().to_string())
					.unwrap_or(object);
				format!("{}/{}", dir, file_name)
			}
			None => object,
		}
	}

	/// The object paths contributed to the link step, unit order.
	pub fn object_paths(&self) -> Vec<String> {
		self.manifest
			.units
			.iter()
			.map(|unit| self.object_path(unit))
			.collect()
	}

	/// One compile command per unit, manifest order. Definitions are
	/// shared, then variant, then unit-specific, duplicates preserved.
	pub fn compile_commands(&self) -> Vec<CompileCommand> {
		self.manifest
			.units
			.iter()
			.map(|unit| {
				let mut definitions = self.definitions.clone();
				definitions.extend(unit.definitions.iter().cloned());

				let object_path = self.object_path(unit);
				let args = command_line::compile_args(
					&self.compiler,
					&self.manifest.include_dirs,
					&self.compile_flags,
					&definitions,
					&object_path,
					&unit.source,
				);

				CompileCommand {
					args,
					source_path: unit.source.clone(),
					object_path,
				}
			})
			.collect()
	}

	/// The final link command. Its object list is exactly the paths the
	/// compile commands produced, in the same order.
	pub fn link_command(&self) -> Vec<String> {
		command_line::link_args(
			&self.compiler,
			&self.link_flags,
			&self.manifest.link_dirs,
			&self.manifest.libraries,
			&self.object_paths(),
			&self.manifest.output,
		)
	}

	/// All compile commands followed by the link command.
	pub fn commands(&self) -> Vec<Vec<String>> {
		let mut commands: Vec<Vec<String>> = self
			.compile_commands()
			.into_iter()
			.map(|command| command.args)
			.collect();
		commands.push(self.link_command());
		commands
	}

	/// One conversion command per resource, declared order.
	pub fn asset_commands(&self) -> Vec<Vec<String>> {
		self.manifest
			.assets
			.jobs()
			.iter()
			.map(|job| {
				command_line::convert_args(&self.converter, &job.input_path, &job.output_path)
			})
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn manifest() -> Manifest {
		serde_yaml::from_str(
			r#"
include-dirs: ["."]
common-flags: ["-Wall"]
compile-flags: ["-O2", "-c"]
definitions: ["HAVE_CONFIG_H"]
link-dirs: ["/usr/local/lib"]
libraries: ["pthread", "m"]
output: ./prog
units:
  - name: main
    source: ./src/main.c
    object: ./src/main.o
    definitions: ["STANDALONE"]
  - name: util
    source: ./src/util.c
    object: ./src/util.o
  - name: random
    source: ./src/random.c
    object: ./src/random.o
debug:
  object-dir: obj/debug
  flags: ["-g"]
  definitions: ["DEBUG"]
assets:
  resources: ["wood"]
"#,
		)
		.unwrap()
	}

	#[test]
	fn test_compile_commands_then_link_command() {
		let manifest = manifest();
		let plan = BuildPlan::new(&manifest, BuildVariant::Release, &Configuration::default());

		let commands = plan.commands();
		assert_eq!(commands.len(), 4);

		assert_eq!(
			commands[0],
			vec![
				"gcc",
				"-I.",
				"-Wall",
				"-O2",
				"-c",
				"-DHAVE_CONFIG_H",
				"-DSTANDALONE",
				"-o",
				"./src/main.o",
				"./src/main.c",
			]
		);

		// Link flags are the common flags only, no -O2 -c.
		assert_eq!(
			commands[3],
			vec![
				"gcc",
				"-Wall",
				"-o",
				"./prog",
				"./src/main.o",
				"./src/util.o",
				"./src/random.o",
				"-L/usr/local/lib",
				"-lpthread",
				"-lm",
			]
		);
	}

	#[test]
	fn test_link_objects_match_compile_outputs_in_order() {
		let manifest = manifest();
		let plan = BuildPlan::new(&manifest, BuildVariant::Debug, &Configuration::default());

		let compiled: Vec<String> = plan
			.compile_commands()
			.into_iter()
			.map(|command| command.object_path)
			.collect();
		assert_eq!(compiled, plan.object_paths());

		// Link line: gcc -Wall -o ./prog <objects..>
		let link = plan.link_command();
		for (index, object) in compiled.iter().enumerate() {
			assert_eq!(&link[4 + index], object);
		}
	}

	#[test]
	fn test_debug_variant_overrides() {
		let manifest = manifest();
		let plan = BuildPlan::new(&manifest, BuildVariant::Debug, &Configuration::default());

		let commands = plan.compile_commands();
		assert_eq!(commands[0].object_path, "obj/debug/main.o");
		assert_eq!(
			commands[0].args,
			vec![
				"gcc",
				"-I.",
				"-Wall",
				"-O2",
				"-c",
				"-g",
				"-DHAVE_CONFIG_H",
				"-DDEBUG",
				"-DSTANDALONE",
				"-o",
				"obj/debug/main.o",
				"./src/main.c",
			]
		);
	}

	#[test]
	fn test_asset_commands() {
		let manifest = manifest();
		let plan = BuildPlan::new(&manifest, BuildVariant::Release, &Configuration::default());

		assert_eq!(
			plan.asset_commands(),
			vec![vec!["bin2c", "images/wood.png", "images/gen/wood_png.h"]]
		);
	}

	#[test]
	fn test_plan_is_deterministic() {
		let manifest = manifest();
		let plan = BuildPlan::new(&manifest, BuildVariant::Release, &Configuration::default());
		assert_eq!(plan.commands(), plan.commands());
	}

	#[test]
	fn test_configured_tool_paths() {
		let manifest = manifest();
		let configuration: Configuration = serde_yaml::from_str(
			r#"
paths:
  gcc: /opt/cross/bin/gcc
"#,
		)
		.unwrap();
		let plan = BuildPlan::new(&manifest, BuildVariant::Release, &configuration);

		assert_eq!(plan.commands()[0][0], "/opt/cross/bin/gcc");
	}
}
