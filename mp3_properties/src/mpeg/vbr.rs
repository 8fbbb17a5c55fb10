use super::constants::VBRI_HEADER_OFFSET;
use super::error::StreamError;
use super::header::FrameHeader;
use super::scanner::FrameScanner;
use crate::config::ParsingMode;
use crate::macros::parse_mode_choice;

use std::io::{Read, Seek};

use byteorder::{BigEndian, ReadBytesExt};

const XING_FRAMES_FLAG: u32 = 0x0001;
const XING_BYTES_FLAG: u32 = 0x0002;

/// The type of header found in the first frame
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VbrHeaderType {
	/// A Xing header, written by VBR encoders
	Xing,
	/// A Xing header written in CBR mode
	Info,
	/// A Fraunhofer VBRI header
	Vbri,
}

/// Stream totals declared by an encoder in the first frame
///
/// Either count is 0 when it wasn't declared.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct VbrHeader {
	/// The type of header, `None` if no header was found
	pub ty: Option<VbrHeaderType>,
	/// The total number of frames in the stream
	pub frames: u32,
	/// The total number of bytes in the stream
	pub size: u32,
}

impl VbrHeader {
	/// Whether either total is missing
	///
	/// An incomplete header can't be used to calculate an average bitrate.
	pub fn is_incomplete(&self) -> bool {
		self.frames == 0 || self.size == 0
	}
}

/// Attempts to read a Xing/Info header, located right after the side information
///
/// # Errors
///
/// * The header identifier is present, but the stream ends before its declared fields
pub fn read_xing<R>(
	scanner: &mut FrameScanner<'_, R>,
	header: &FrameHeader,
) -> Result<VbrHeader, StreamError>
where
	R: Read + Seek,
{
	scanner.seek_from_frame_start(u64::from(header.data_start()))?;

	let mut id = [0; 4];
	scanner
		.read_exact(&mut id)
		.map_err(StreamError::truncated("a Xing header"))?;

	let ty = match &id {
		b"Xing" => VbrHeaderType::Xing,
		b"Info" => VbrHeaderType::Info,
		_ => return Ok(VbrHeader::default()),
	};

	let flags = scanner
		.read_u32::<BigEndian>()
		.map_err(StreamError::truncated("the Xing header flags"))?;

	let mut vbr_header = VbrHeader {
		ty: Some(ty),
		..VbrHeader::default()
	};

	if flags & XING_FRAMES_FLAG == XING_FRAMES_FLAG {
		vbr_header.frames = scanner
			.read_u32::<BigEndian>()
			.map_err(StreamError::truncated("the Xing frame count"))?;
	}

	if flags & XING_BYTES_FLAG == XING_BYTES_FLAG {
		vbr_header.size = scanner
			.read_u32::<BigEndian>()
			.map_err(StreamError::truncated("the Xing byte count"))?;
	}

	log::debug!(
		"MPEG: Found {ty:?} header (frames: {}, bytes: {})",
		vbr_header.frames,
		vbr_header.size
	);

	Ok(vbr_header)
}

/// Attempts to read a VBRI header, located 36 bytes into the frame
///
/// # Errors
///
/// * The header identifier is present, but the stream ends before its declared fields
pub fn read_vbri<R>(scanner: &mut FrameScanner<'_, R>) -> Result<VbrHeader, StreamError>
where
	R: Read + Seek,
{
	scanner.seek_from_frame_start(VBRI_HEADER_OFFSET)?;

	let mut id = [0; 4];
	scanner
		.read_exact(&mut id)
		.map_err(StreamError::truncated("a VBRI header"))?;

	if id != *b"VBRI" {
		return Ok(VbrHeader::default());
	}

	// Skip 6 bytes
	// Version ID (2)
	// Delay float (2)
	// Quality indicator (2)
	let _info = scanner
		.read_uint::<BigEndian>(6)
		.map_err(StreamError::truncated("the VBRI header"))?;

	// Unlike Xing, the byte count comes first
	let size = scanner
		.read_u32::<BigEndian>()
		.map_err(StreamError::truncated("the VBRI byte count"))?;
	let frames = scanner
		.read_u32::<BigEndian>()
		.map_err(StreamError::truncated("the VBRI frame count"))?;

	log::debug!("MPEG: Found VBRI header (frames: {frames}, bytes: {size})");

	Ok(VbrHeader {
		ty: Some(VbrHeaderType::Vbri),
		frames,
		size,
	})
}

/// Reads the optional header of the current frame
///
/// A Xing/Info header is tried first. If it doesn't provide both totals, a VBRI header is tried.
/// When neither yields both totals, whatever the Xing/Info header provided is kept.
///
/// # Errors
///
/// See [`read_xing`] and [`read_vbri`]. With [`ParsingMode::Relaxed`], a header cut short by the
/// end of the stream is treated as absent instead.
pub fn read_vbr_header<R>(
	scanner: &mut FrameScanner<'_, R>,
	header: &FrameHeader,
	parsing_mode: ParsingMode,
) -> Result<VbrHeader, StreamError>
where
	R: Read + Seek,
{
	let xing = or_absent(read_xing(scanner, header), parsing_mode)?;
	if !xing.is_incomplete() {
		return Ok(xing);
	}

	let vbri = or_absent(read_vbri(scanner), parsing_mode)?;
	if !vbri.is_incomplete() || xing.ty.is_none() {
		return Ok(vbri);
	}

	Ok(xing)
}

fn or_absent(
	result: Result<VbrHeader, StreamError>,
	parsing_mode: ParsingMode,
) -> Result<VbrHeader, StreamError> {
	match result {
		Err(StreamError::UnexpectedEnd(what)) => parse_mode_choice!(
			parsing_mode,
			RELAXED: {
				log::warn!("MPEG: Stream ended while reading {what}, ignoring it");
				Ok(VbrHeader::default())
			},
			DEFAULT: Err(StreamError::UnexpectedEnd(what))
		),
		result => result,
	}
}
