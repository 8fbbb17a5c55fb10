//! Contains the errors that can arise while reading MP3 audio properties
//!
//! The primary error is [`PropertiesError`]. The type of error is determined by [`ErrorKind`],
//! which can be extended at any time.

pub use crate::mpeg::error::{MpegFrameError, StreamError};
use crate::macros::decode_err;

use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, PropertiesError>`
pub type Result<T> = std::result::Result<T, PropertiesError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	/// The stream is not decodable as MPEG Layer III audio
	InvalidAudio(InvalidAudioError),

	// Conversions for external errors
	/// Represents all cases of [`std::io::Error`] other than truncation
	Io(std::io::Error),
}

/// An error that arises when a stream does not contain decodable MP3 audio
pub struct InvalidAudioError {
	description: &'static str,
	cause: Option<StreamError>,
}

impl InvalidAudioError {
	/// The codec name attached to every `InvalidAudioError`
	pub const FORMAT: &'static str = "MP3";

	/// Create an `InvalidAudioError` from a description
	#[must_use]
	pub const fn new(description: &'static str) -> Self {
		Self {
			description,
			cause: None,
		}
	}

	/// Attach the low-level stream condition that ended the analysis
	#[must_use]
	pub fn with_cause(mut self, cause: StreamError) -> Self {
		self.cause = Some(cause);
		self
	}

	/// Returns the error description
	pub fn description(&self) -> &str {
		self.description
	}

	/// Returns the stream condition that caused this error, if any
	pub fn cause(&self) -> Option<&StreamError> {
		self.cause.as_ref()
	}
}

impl Debug for InvalidAudioError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match &self.cause {
			Some(cause) => write!(
				f,
				"{}: {:?} ({:?})",
				Self::FORMAT,
				self.description,
				cause
			),
			None => write!(f, "{}: {:?}", Self::FORMAT, self.description),
		}
	}
}

impl Display for InvalidAudioError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match &self.cause {
			Some(cause) => write!(f, "{}: {} ({cause})", Self::FORMAT, self.description),
			None => write!(f, "{}: {}", Self::FORMAT, self.description),
		}
	}
}

/// Errors that could occur while reading audio properties
pub struct PropertiesError {
	pub(crate) kind: ErrorKind,
}

impl PropertiesError {
	/// Create a `PropertiesError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use mp3_properties::error::{ErrorKind, InvalidAudioError, PropertiesError};
	///
	/// let invalid_audio = PropertiesError::new(ErrorKind::InvalidAudio(InvalidAudioError::new(
	/// 	"No frame found",
	/// )));
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use mp3_properties::error::{ErrorKind, InvalidAudioError, PropertiesError};
	///
	/// let invalid_audio = PropertiesError::new(ErrorKind::InvalidAudio(InvalidAudioError::new(
	/// 	"No frame found",
	/// )));
	/// if let ErrorKind::InvalidAudio(err) = invalid_audio.kind() {
	/// 	println!("Stream is not an MP3: {err}");
	/// }
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}

	/// Whether the stream content was rejected, as opposed to failing to be read
	pub fn is_invalid_audio(&self) -> bool {
		matches!(self.kind, ErrorKind::InvalidAudio(_))
	}
}

impl core::error::Error for PropertiesError {
	fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
		match &self.kind {
			ErrorKind::InvalidAudio(err) => match err.cause() {
				Some(cause) => Some(cause),
				None => None,
			},
			ErrorKind::Io(err) => Some(err),
		}
	}
}

impl From<InvalidAudioError> for PropertiesError {
	fn from(input: InvalidAudioError) -> Self {
		Self {
			kind: ErrorKind::InvalidAudio(input),
		}
	}
}

impl From<std::io::Error> for PropertiesError {
	fn from(input: std::io::Error) -> Self {
		Self {
			kind: ErrorKind::Io(input),
		}
	}
}

impl From<StreamError> for PropertiesError {
	fn from(input: StreamError) -> Self {
		match input {
			StreamError::Io(err) => err.into(),
			StreamError::ScanLimitReached => {
				decode_err!("No MPEG frame found").with_cause(input).into()
			},
			StreamError::UnexpectedEnd(_) => {
				decode_err!("Not decodable as MPEG Layer III audio").with_cause(input).into()
			},
		}
	}
}

impl Debug for PropertiesError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			ErrorKind::InvalidAudio(ref err) => write!(f, "{err:?}"),
			ErrorKind::Io(ref err) => write!(f, "{err:?}"),
		}
	}
}

impl Display for PropertiesError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			ErrorKind::InvalidAudio(ref err) => write!(f, "{err}"),
			ErrorKind::Io(ref err) => write!(f, "{err}"),
		}
	}
}
