use super::constants::{BITRATES, HEADER_SIZE, SAMPLE_RATES, SAMPLES, SIDE_INFORMATION_SIZES};
use super::error::MpegFrameError;

/// Whether two bytes form a frame sync (11 set bits)
pub(crate) fn verify_frame_sync(frame_sync: [u8; 2]) -> bool {
	frame_sync[0] == 0xFF && frame_sync[1] >> 5 == 0b111
}

// Used to compare the versions, layers, and sample rates of two frame headers.
// If they aren't equal, something is broken.
const HEADER_MASK: u32 = 0xFFFE_0C00;

/// MPEG Audio version
#[derive(Default, PartialEq, Eq, Copy, Clone, Debug)]
#[allow(missing_docs)]
pub enum MpegVersion {
	#[default]
	V1,
	V2,
	V2_5,
}

impl MpegVersion {
	// MPEG-2 and MPEG-2.5 share the bitrate, side information, and sample count tables
	fn table_index(self) -> usize {
		match self {
			MpegVersion::V1 => 0,
			MpegVersion::V2 | MpegVersion::V2_5 => 1,
		}
	}
}

/// MPEG layer
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Layer {
	Layer1 = 1,
	Layer2 = 2,
	#[default]
	Layer3 = 3,
}

/// Channel mode
#[derive(Default, Copy, Clone, PartialEq, Eq, Debug)]
#[allow(missing_docs)]
pub enum ChannelMode {
	#[default]
	Stereo = 0,
	JointStereo = 1,
	/// Two independent mono channels
	DualChannel = 2,
	SingleChannel = 3,
}

/// A decoded MPEG Layer III frame header
///
/// Every field is derived from the 4 header bytes alone.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct FrameHeader {
	/// MPEG version
	pub version: MpegVersion,
	/// Bitrate (kbps), 0 for a "free format" stream
	pub bitrate: u32,
	/// Sample rate (Hz)
	pub sample_rate: u32,
	/// 1 if the frame carries an extra padding byte, otherwise 0
	pub padding: u32,
	/// Channel mode
	pub channel_mode: ChannelMode,
	/// Channel count, 1 for [`ChannelMode::SingleChannel`], otherwise 2
	pub channels: u8,
	/// Samples per frame (1152 for MPEG-1, 576 for MPEG-2/2.5)
	pub samples_per_frame: u16,
	/// Size of the side information following the header
	pub side_info_len: u32,
}

impl FrameHeader {
	/// Decode the first 4 bytes of a frame
	///
	/// The first byte is assumed to be part of the frame sync, and is not inspected.
	///
	/// # Errors
	///
	/// * The version, bitrate index, or sample rate index use a reserved value
	/// * The layer is anything but Layer III, see [`MpegFrameError::UnsupportedLayer`]
	///
	/// # Examples
	///
	/// ```rust
	/// use mp3_properties::mpeg::{FrameHeader, MpegVersion};
	///
	/// # fn main() -> Result<(), mp3_properties::error::MpegFrameError> {
	/// let header = FrameHeader::parse([0xFF, 0xFB, 0x90, 0x64])?;
	///
	/// assert_eq!(header.version, MpegVersion::V1);
	/// assert_eq!(header.bitrate, 128);
	/// assert_eq!(header.sample_rate, 44100);
	/// assert_eq!(header.channels, 2);
	/// # Ok(()) }
	/// ```
	pub fn parse(bytes: [u8; 4]) -> Result<Self, MpegFrameError> {
		let data = u32::from_be_bytes(bytes);

		let version = match (data >> 19) & 0b11 {
			0b00 => MpegVersion::V2_5,
			0b10 => MpegVersion::V2,
			0b11 => MpegVersion::V1,
			_ => return Err(MpegFrameError::BadVersion),
		};

		let version_index = version.table_index();

		match (data >> 17) & 0b11 {
			0b01 => {},
			0b10 => return Err(MpegFrameError::UnsupportedLayer(Some(Layer::Layer2))),
			0b11 => return Err(MpegFrameError::UnsupportedLayer(Some(Layer::Layer1))),
			_ => return Err(MpegFrameError::UnsupportedLayer(None)),
		}

		let bitrate_index = (data >> 12) & 0xF;
		if bitrate_index == 0xF {
			return Err(MpegFrameError::BadBitrate);
		}

		let bitrate = BITRATES[version_index][bitrate_index as usize];

		// Sample rate index
		let sample_rate_index = (data >> 10) & 0b11;
		let sample_rate = match sample_rate_index {
			// This is invalid
			0b11 => return Err(MpegFrameError::BadSampleRate),
			_ => SAMPLE_RATES[version as usize][sample_rate_index as usize],
		};

		let padding = (data >> 9) & 1;

		let channel_mode = match (data >> 6) & 0b11 {
			0b00 => ChannelMode::Stereo,
			0b01 => ChannelMode::JointStereo,
			0b10 => ChannelMode::DualChannel,
			0b11 => ChannelMode::SingleChannel,
			_ => unreachable!(),
		};

		let is_mono = channel_mode == ChannelMode::SingleChannel;

		Ok(Self {
			version,
			bitrate,
			sample_rate,
			padding,
			channel_mode,
			channels: if is_mono { 1 } else { 2 },
			samples_per_frame: SAMPLES[version_index],
			side_info_len: SIDE_INFORMATION_SIZES[version_index][usize::from(is_mono)],
		})
	}

	/// The total length of the frame in bytes, including the header
	///
	/// This is `floor(samples_per_frame / 8 * bitrate * 1000 / sample_rate) + padding`.
	pub fn frame_len(&self) -> u32 {
		(u32::from(self.samples_per_frame) * self.bitrate * 125 / self.sample_rate) + self.padding
	}

	/// Whether the frame uses the "free" bitrate, which can't be determined from the header
	pub fn is_free_format(&self) -> bool {
		self.bitrate == 0
	}

	/// The offset of the frame data (after the side information), relative to the frame start
	pub fn data_start(&self) -> u32 {
		HEADER_SIZE + self.side_info_len
	}
}

/// Compares the versions, layers, and sample rates of two raw frame headers
pub(super) fn cmp_header(first_header: [u8; 4], second_header: [u8; 4]) -> bool {
	u32::from_be_bytes(first_header) & HEADER_MASK == u32::from_be_bytes(second_header) & HEADER_MASK
}
