use crate::command_line;
use crate::configuration::Configuration;
use crate::manifest::Manifest;
use crate::plan::BuildPlan;
use crate::variant::BuildVariant;
use crate::Result;
use std::path::Path;

pub struct Options<'a> {
	pub manifest_path: &'a Path,
}

pub fn execute(options: &Options) -> Result<()> {
	let configuration = Configuration::load()?;
	let manifest = Manifest::load(options.manifest_path)?;
	// Asset conversion does not depend on the build variant.
	let plan = BuildPlan::new(&manifest, BuildVariant::default(), &configuration);

	for command in plan.asset_commands() {
		println!("{}", command_line::join(&command));
	}

	Ok(())
}
