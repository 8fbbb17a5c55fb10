use super::constants::HEADER_SIZE;
use super::error::StreamError;
use super::header::{FrameHeader, cmp_header, verify_frame_sync};
use crate::config::{ParseOptions, ParsingMode};

use std::io::{Read, Seek, SeekFrom};

use byteorder::ReadBytesExt;

/// A cursor over an MPEG stream
///
/// The scanner holds the only reference to the reader for as long as it lives, and tracks the
/// offset of the frame currently being examined ([`FrameScanner::frame_start`]).
///
/// It implements [`Read`], reading from wherever the cursor currently sits.
pub struct FrameScanner<'a, R> {
	reader: &'a mut R,
	frame_start: u64,
	header: [u8; 4],
	scan_limit: Option<u64>,
	parsing_mode: ParsingMode,
}

impl<'a, R> FrameScanner<'a, R>
where
	R: Read + Seek,
{
	/// Create a new `FrameScanner`, starting at the reader's current position
	///
	/// # Errors
	///
	/// * The reader's position can't be determined
	pub fn new(reader: &'a mut R, parse_options: ParseOptions) -> std::io::Result<Self> {
		let start = reader.stream_position()?;

		Ok(Self {
			reader,
			frame_start: start,
			header: [0; 4],
			scan_limit: parse_options
				.max_junk_bytes
				.map(|max_junk_bytes| start.saturating_add(max_junk_bytes)),
			parsing_mode: parse_options.parsing_mode,
		})
	}

	/// The offset of the frame currently being examined
	pub fn frame_start(&self) -> u64 {
		self.frame_start
	}

	/// Searches for the next frame sync (11 set bits), starting at the current position
	///
	/// On success, the cursor is left at the start of the sync, which becomes the new
	/// [`FrameScanner::frame_start`]. The search moves in 8 bit steps, so the sync needs to be
	/// byte aligned.
	///
	/// # Errors
	///
	/// * The stream ends before a sync is found ([`StreamError::UnexpectedEnd`])
	/// * The search passes [`ParseOptions::max_junk_bytes`]
	pub fn seek_to_next_frame(&mut self) -> Result<u64, StreamError> {
		let mut pos = self.reader.stream_position()?;
		let mut frame_sync = [0u8; 2];

		// Each iteration expects the first byte to be set from the previous one
		frame_sync[0] = self
			.reader
			.read_u8()
			.map_err(StreamError::truncated("a frame sync"))?;

		loop {
			if self.scan_limit.is_some_and(|limit| pos > limit) {
				return Err(StreamError::ScanLimitReached);
			}

			frame_sync[1] = self
				.reader
				.read_u8()
				.map_err(StreamError::truncated("a frame sync"))?;

			if verify_frame_sync(frame_sync) {
				// Rewind, so the sync is the first thing read
				self.reader.seek(SeekFrom::Current(-2))?;
				self.frame_start = pos;
				return Ok(pos);
			}

			frame_sync[0] = frame_sync[1];
			pos += 1;
		}
	}

	/// Reads the 4 header bytes of the current frame
	///
	/// # Errors
	///
	/// * The stream ends within the header ([`StreamError::UnexpectedEnd`])
	pub fn read_header(&mut self) -> Result<[u8; 4], StreamError> {
		self.reader.seek(SeekFrom::Start(self.frame_start))?;
		self.reader
			.read_exact(&mut self.header)
			.map_err(StreamError::truncated("a frame header"))?;

		Ok(self.header)
	}

	/// Checks that another frame sync follows the current frame
	///
	/// The next sync is expected at `frame_start + header.frame_len()`. With [`ParsingMode::Strict`],
	/// the following header must also share the current header's version, layer, and sample rate.
	///
	/// The cursor is restored before returning. A frame whose length can't be determined from
	/// `header` (free format) is never verified.
	///
	/// # Errors
	///
	/// * The stream ends before the next sync ([`StreamError::UnexpectedEnd`])
	pub fn verify_frame_sync(&mut self, header: &FrameHeader) -> Result<bool, StreamError> {
		let frame_len = header.frame_len();
		if frame_len < HEADER_SIZE {
			return Ok(false);
		}

		let strict = self.parsing_mode == ParsingMode::Strict;
		let check_len = if strict { 4 } else { 2 };

		let pos = self.reader.stream_position()?;
		self.reader
			.seek(SeekFrom::Start(self.frame_start + u64::from(frame_len)))?;

		let mut next_header = [0; 4];
		let read_result = self.reader.read_exact(&mut next_header[..check_len]);

		self.reader.seek(SeekFrom::Start(pos))?;
		read_result.map_err(StreamError::truncated("the next frame sync"))?;

		if !verify_frame_sync([next_header[0], next_header[1]]) {
			return Ok(false);
		}

		if strict {
			return Ok(cmp_header(self.header, next_header));
		}

		Ok(true)
	}

	/// Moves the cursor one byte past the current frame's start, so the search can continue
	///
	/// # Errors
	///
	/// * The reader fails to seek
	pub fn skip_candidate(&mut self) -> Result<(), StreamError> {
		self.reader.seek(SeekFrom::Start(self.frame_start + 1))?;
		Ok(())
	}

	/// Moves the cursor to `offset` bytes past the current frame's start
	///
	/// # Errors
	///
	/// * The reader fails to seek
	pub fn seek_from_frame_start(&mut self, offset: u64) -> Result<(), StreamError> {
		self.reader
			.seek(SeekFrom::Start(self.frame_start + offset))?;
		Ok(())
	}
}

impl<R> Read for FrameScanner<'_, R>
where
	R: Read,
{
	fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
		self.reader.read(buf)
	}
}
