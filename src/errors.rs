use std::convert::Into;
use std::error::Error as StdError;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ErrorKind {
	FailedToDeserialize(String),
	FailedToRead(PathBuf),
	FailedToSerialize(String),
	FailedToWrite(PathBuf),
	Message(String),
}

#[derive(Debug)]
pub struct Error {
	pub kind: ErrorKind,
	source: Option<Box<dyn StdError + Sync + Send>>,
}

impl Error {
	pub fn failed_to_deserialize(
		contents: &str,
		source: impl Into<Box<dyn StdError + Send + Sync>>,
	) -> Self {
		Error {
			kind: ErrorKind::FailedToDeserialize(contents.to_string()),
			source: Some(source.into()),
		}
	}

	pub fn failed_to_read(path: impl Into<PathBuf>, source: ::std::io::Error) -> Self {
		Error {
			kind: ErrorKind::FailedToRead(path.into()),
			source: Some(source.into()),
		}
	}

	pub fn failed_to_serialize(
		name: &str,
		source: impl Into<Box<dyn StdError + Send + Sync>>,
	) -> Self {
		Error {
			kind: ErrorKind::FailedToSerialize(name.to_string()),
			source: Some(source.into()),
		}
	}

	pub fn failed_to_write(path: impl Into<PathBuf>, source: ::std::io::Error) -> Self {
		Error {
			kind: ErrorKind::FailedToWrite(path.into()),
			source: Some(source.into()),
		}
	}

	pub fn message(text: impl ToString) -> Self {
		Self {
			kind: ErrorKind::Message(text.to_string()),
			source: None,
		}
	}
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match &self.kind {
			ErrorKind::FailedToDeserialize(contents) => {
				write!(f, "Failed to deserialize '{}'.", contents)
			}
			ErrorKind::FailedToRead(path) => {
				write!(f, "Failed to read '{}'.", path.to_string_lossy())
			}
			ErrorKind::FailedToSerialize(name) => write!(f, "Failed to serialize '{}'.", name),
			ErrorKind::FailedToWrite(path) => {
				write!(f, "Failed to write '{}'.", path.to_string_lossy())
			}
			ErrorKind::Message(message) => write!(f, "{}", message),
		}
	}
}

impl StdError for Error {
	fn source(&self) -> Option<&(dyn StdError + 'static)> {
		self.source
			.as_ref()
			.map(|c| &**c as &(dyn StdError + 'static))
	}
}

impl From<&str> for Error {
	fn from(text: &str) -> Self {
		Self::message(text)
	}
}

impl From<String> for Error {
	fn from(text: String) -> Self {
		Self::message(text)
	}
}

pub type Result<T> = ::std::result::Result<T, Error>;
