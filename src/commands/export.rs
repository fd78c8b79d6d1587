use crate::configuration::Configuration;
use crate::export;
use crate::manifest::Manifest;
use crate::plan::BuildPlan;
use crate::variant::BuildVariant;
use crate::Result;
use std::path::Path;

pub struct Options<'a> {
	pub manifest_path: &'a Path,
	pub output: &'a Path,
	pub variant: BuildVariant,
}

pub fn execute(options: &Options) -> Result<()> {
	let configuration = Configuration::load()?;
	let manifest = Manifest::load(options.manifest_path)?;
	let plan = BuildPlan::new(&manifest, options.variant, &configuration);

	export::write_database(&plan, ".", options.output)?;

	println!(
		"Compilation database written to '{}'.",
		options.output.to_string_lossy()
	);
	Ok(())
}
