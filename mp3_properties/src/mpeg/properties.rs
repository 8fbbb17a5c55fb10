use super::header::{ChannelMode, FrameHeader, MpegVersion};
use super::vbr::{VbrHeader, VbrHeaderType};
use crate::config::ParseOptions;
use crate::error::Result;
use crate::util::math::RoundedDivision;

use std::io::{Read, Seek};
use std::time::Duration;

/// An MP3 stream's audio properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub struct AudioInfo {
	pub(crate) version: MpegVersion,
	pub(crate) channel_mode: ChannelMode,
	pub(crate) channels: u8,
	pub(crate) sample_rate: u32,
	pub(crate) sample_count: u64,
	pub(crate) bitrate: u32,
	pub(crate) vbr_header: Option<VbrHeaderType>,
	pub(crate) first_frame_offset: u64,
}

impl AudioInfo {
	/// The format tag for all MP3 streams
	pub const FORMAT: &'static str = "MP3";

	/// Read the audio properties of an MP3 stream
	///
	/// The reader is expected to be positioned at (or before) the first frame, past any leading tags.
	///
	/// # Errors
	///
	/// * No Layer III frame could be found before the end of the stream
	/// * The stream ends while reading the first frame's headers
	/// * Any other error from the reader
	///
	/// # Examples
	///
	/// ```rust,no_run
	/// use mp3_properties::AudioInfo;
	/// use mp3_properties::config::ParseOptions;
	/// use std::fs::File;
	/// use std::io::BufReader;
	///
	/// # fn main() -> mp3_properties::error::Result<()> {
	/// let mut reader = BufReader::new(File::open("foo.mp3")?);
	/// let info = AudioInfo::read_from(&mut reader, ParseOptions::new())?;
	///
	/// println!("{} Hz, {} channel(s)", info.sample_rate(), info.channels());
	/// # Ok(()) }
	/// ```
	pub fn read_from<R>(reader: &mut R, parse_options: ParseOptions) -> Result<Self>
	where
		R: Read + Seek,
	{
		super::read::read_from(reader, parse_options)
	}

	pub(super) fn new(
		header: &FrameHeader,
		vbr_header: VbrHeader,
		first_frame_offset: u64,
	) -> Self {
		let samples_per_frame = u64::from(header.samples_per_frame);
		let sample_rate = u64::from(header.sample_rate);

		let bitrate = if vbr_header.is_incomplete() {
			header.bitrate * 1000
		} else {
			debug_assert!(vbr_header.frames > 0 && vbr_header.size > 0);

			// Total bits / total duration in seconds
			let total_bits = u64::from(vbr_header.size) * 8;
			let total_samples = u64::from(vbr_header.frames) * samples_per_frame;
			u32::try_from((total_bits * sample_rate).div_round(total_samples)).unwrap_or(u32::MAX)
		};

		Self {
			version: header.version,
			channel_mode: header.channel_mode,
			channels: header.channels,
			sample_rate: header.sample_rate,
			sample_count: u64::from(vbr_header.frames) * samples_per_frame,
			bitrate,
			vbr_header: vbr_header.ty,
			first_frame_offset,
		}
	}

	/// The format tag, always [`AudioInfo::FORMAT`]
	#[allow(clippy::unused_self)]
	pub fn format(&self) -> &'static str {
		Self::FORMAT
	}

	/// Channel count
	pub fn channels(&self) -> u8 {
		self.channels
	}

	/// Sample rate (Hz)
	pub fn sample_rate(&self) -> u32 {
		self.sample_rate
	}

	/// Total number of samples (per channel)
	///
	/// This is only known when the stream declares its frame count. A value of 0 means the
	/// length is **unknown**, not that the stream is empty.
	pub fn sample_count(&self) -> u64 {
		self.sample_count
	}

	/// Bitrate (bits/second)
	///
	/// With a complete Xing/VBRI header, this is the true average over the whole stream. Otherwise,
	/// it is the first frame's bitrate.
	pub fn bitrate(&self) -> u32 {
		self.bitrate
	}

	/// Duration of the audio, zero if [`AudioInfo::sample_count`] is unknown
	pub fn duration(&self) -> Duration {
		if self.sample_count == 0 || self.sample_rate == 0 {
			return Duration::ZERO;
		}

		Duration::from_millis((self.sample_count * 1000).div_round(u64::from(self.sample_rate)))
	}

	/// MPEG version
	pub fn version(&self) -> MpegVersion {
		self.version
	}

	/// MPEG channel mode
	pub fn channel_mode(&self) -> ChannelMode {
		self.channel_mode
	}

	/// The header the stream totals came from, if one was found
	pub fn vbr_header(&self) -> Option<VbrHeaderType> {
		self.vbr_header
	}

	/// The position of the first verified frame in the stream
	pub fn first_frame_offset(&self) -> u64 {
		self.first_frame_offset
	}
}
