use std::fs;
use std::path::PathBuf;

lazy_static! {
	pub static ref USER_SETTINGS_DIRECTORY: PathBuf = {
		let p = dirs::home_dir().unwrap().join(".buildgen");
		fs::create_dir_all(&p).unwrap();
		p
	};
}
