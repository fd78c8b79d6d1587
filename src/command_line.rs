//! Assembles ordered argument vectors for toolchain invocations.
//!
//! These functions are pure formatters: they never validate paths,
//! deduplicate flags, or reorder anything. The caller owns the order.

/// Arguments for compiling one source file to one object file:
/// `<compiler> (-I<dir>)* <flag>* (-D<def>)* -o <object> <source>`.
pub fn compile_args(
	compiler: &str,
	include_dirs: &[String],
	flags: &[String],
	definitions: &[String],
	output_path: &str,
	source_path: &str,
) -> Vec<String> {
	let mut args = vec![compiler.to_string()];
	args.extend(include_dirs.iter().map(|dir| format!("-I{}", dir)));
	args.extend(flags.iter().cloned());
	args.extend(definitions.iter().map(|definition| format!("-D{}", definition)));
	args.push("-o".to_string());
	args.push(output_path.to_string());
	args.push(source_path.to_string());
	args
}

/// Arguments for linking objects and libraries into one executable:
/// `<compiler> <flag>* -o <output> <object>* (-L<dir>)* (-l<lib>)*`.
///
/// Libraries come after the object list because `-l` order affects
/// symbol resolution for static archives.
pub fn link_args(
	compiler: &str,
	flags: &[String],
	link_dirs: &[String],
	libraries: &[String],
	object_paths: &[String],
	output_path: &str,
) -> Vec<String> {
	let mut args = vec![compiler.to_string()];
	args.extend(flags.iter().cloned());
	args.push("-o".to_string());
	args.push(output_path.to_string());
	args.extend(object_paths.iter().cloned());
	args.extend(link_dirs.iter().map(|dir| format!("-L{}", dir)));
	args.extend(libraries.iter().map(|library| format!("-l{}", library)));
	args
}

/// Arguments for converting one binary resource to a generated header:
/// `<converter> <input> <output>`. No flags, distinct from the
/// compile/link shapes.
pub fn convert_args(converter: &str, input_path: &str, output_path: &str) -> Vec<String> {
	vec![
		converter.to_string(),
		input_path.to_string(),
		output_path.to_string(),
	]
}

/// Space-joins tokens into one emitted line. Tokens are never quoted
/// or escaped; a token containing a space produces a broken line, and
/// the caller must supply already-safe tokens.
pub fn join(args: &[String]) -> String {
	args.join(" ")
}
