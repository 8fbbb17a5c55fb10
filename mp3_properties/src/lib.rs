//! Recover audio properties from raw MPEG Layer III streams.
//!
//! Given a seekable stream positioned past any leading tags, this locates the first genuine
//! frame, reads an optional Xing/Info or VBRI header, and reports the channel count, sample
//! rate, total sample count, and bitrate.
//!
//! # Examples
//!
//! ## Reading from a file
//!
//! ```rust,no_run
//! # fn main() -> mp3_properties::error::Result<()> {
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! let mut reader = BufReader::new(File::open("test.mp3")?);
//! let info = mp3_properties::read_from(&mut reader)?;
//!
//! println!("Bitrate: {} bps", info.bitrate());
//! # Ok(())
//! # }
//! ```
//!
//! ## Telling bad content apart from I/O failures
//!
//! ```rust
//! use mp3_properties::error::ErrorKind;
//! use std::io::Cursor;
//!
//! let mut reader = Cursor::new(b"definitely not an mp3");
//! let err = mp3_properties::read_from(&mut reader).unwrap_err();
//!
//! assert!(matches!(err.kind(), ErrorKind::InvalidAudio(_)));
//! ```
//!
//! # Important notes
//!
//! The stream is read sequentially, with a single cursor. A [`mpeg::FrameScanner`] borrows the
//! reader exclusively for the duration of one analysis, so one stream can never be shared by two
//! analyses at once. Separate streams can be analyzed from separate threads freely.
//!
//! The search for the first frame is bounded only by the stream length, unless
//! [`ParseOptions::max_junk_bytes`](config::ParseOptions::max_junk_bytes) is set.

pub mod config;
pub mod error;
pub(crate) mod macros;
pub mod mpeg;
mod util;

pub use crate::mpeg::AudioInfo;

use crate::config::ParseOptions;
use crate::error::Result;

use std::io::{Read, Seek};

/// Read the audio properties of an MP3 stream with the default [`ParseOptions`]
///
/// See [`AudioInfo::read_from`].
///
/// # Errors
///
/// See [`AudioInfo::read_from`]
pub fn read_from<R>(reader: &mut R) -> Result<AudioInfo>
where
	R: Read + Seek,
{
	AudioInfo::read_from(reader, ParseOptions::new())
}
