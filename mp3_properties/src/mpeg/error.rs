use super::header::Layer;

use std::fmt::{Display, Formatter};

/// Errors that arise while decoding a single MPEG frame header
///
/// All variants other than [`MpegFrameError::UnsupportedLayer`] describe a structurally
/// impossible header, usually the result of a false sync inside audio data.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MpegFrameError {
	/// The version bits use the reserved value `01`
	BadVersion,
	/// The bitrate index is `1111`
	BadBitrate,
	/// The sample rate index is `11`
	BadSampleRate,
	/// A well-formed MPEG header that isn't Layer III
	///
	/// `None` if the layer bits use the reserved value `00`.
	UnsupportedLayer(Option<Layer>),
}

impl MpegFrameError {
	/// Whether the header was well-formed, but describes a layer other than Layer III
	pub fn is_unsupported(&self) -> bool {
		matches!(self, MpegFrameError::UnsupportedLayer(_))
	}

	/// Whether the header is structurally invalid
	pub fn is_invalid(&self) -> bool {
		!self.is_unsupported()
	}
}

impl Display for MpegFrameError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			MpegFrameError::BadVersion => write!(f, "Invalid MPEG frame version"),
			MpegFrameError::BadBitrate => write!(f, "MPEG frame has an invalid bitrate index"),
			MpegFrameError::BadSampleRate => {
				write!(f, "MPEG frame has an invalid sample rate index")
			},
			MpegFrameError::UnsupportedLayer(Some(layer)) => {
				write!(f, "Unsupported MPEG layer ({layer:?}), expected Layer III")
			},
			MpegFrameError::UnsupportedLayer(None) => {
				write!(f, "MPEG frame uses a reserved layer")
			},
		}
	}
}

impl core::error::Error for MpegFrameError {}

/// Errors that arise while moving through an MPEG stream
#[derive(Debug)]
#[non_exhaustive]
pub enum StreamError {
	/// The stream ended before the described structure could be read
	UnexpectedEnd(&'static str),
	/// The sync search passed [`ParseOptions::max_junk_bytes`](crate::config::ParseOptions::max_junk_bytes)
	ScanLimitReached,
	/// Any other error from the underlying reader
	Io(std::io::Error),
}

impl StreamError {
	/// Reinterpret an end-of-file from the reader as a truncation of `what`
	pub(crate) fn truncated(what: &'static str) -> impl FnOnce(std::io::Error) -> Self {
		move |err| match err.kind() {
			std::io::ErrorKind::UnexpectedEof => StreamError::UnexpectedEnd(what),
			_ => StreamError::Io(err),
		}
	}
}

impl From<std::io::Error> for StreamError {
	fn from(err: std::io::Error) -> Self {
		StreamError::Io(err)
	}
}

impl Display for StreamError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			StreamError::UnexpectedEnd(what) => write!(f, "Stream ended while reading {what}"),
			StreamError::ScanLimitReached => write!(
				f,
				"No frame sync found within the allowed number of junk bytes"
			),
			StreamError::Io(err) => write!(f, "{err}"),
		}
	}
}

impl core::error::Error for StreamError {
	fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
		match self {
			StreamError::Io(err) => Some(err),
			_ => None,
		}
	}
}
