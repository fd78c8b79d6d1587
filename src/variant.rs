use std::fmt;
use std::str::FromStr;

/// Selects which override block of the manifest applies to a plan.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildVariant {
	Debug,
	Release,
}

impl Default for BuildVariant {
	fn default() -> Self {
		BuildVariant::Release
	}
}

impl FromStr for BuildVariant {
	type Err = &'static str;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"debug" => Ok(BuildVariant::Debug),
			"release" => Ok(BuildVariant::Release),
			_ => Err("Invalid build variant."),
		}
	}
}

impl fmt::Display for BuildVariant {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			BuildVariant::Debug => write!(f, "debug"),
			BuildVariant::Release => write!(f, "release"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_from_str() {
		assert_eq!("debug".parse(), Ok(BuildVariant::Debug));
		assert_eq!("release".parse(), Ok(BuildVariant::Release));
		assert!("profile".parse::<BuildVariant>().is_err());
	}
}
