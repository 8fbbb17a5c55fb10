use super::error::StreamError;
use super::header::FrameHeader;
use super::properties::AudioInfo;
use super::scanner::FrameScanner;
use super::vbr::read_vbr_header;
use crate::config::{ParseOptions, ParsingMode};
use crate::error::Result;
use crate::macros::parse_mode_choice;

use std::io::{Read, Seek};

pub(super) fn read_from<R>(reader: &mut R, parse_options: ParseOptions) -> Result<AudioInfo>
where
	R: Read + Seek,
{
	let mut scanner = FrameScanner::new(reader, parse_options)?;

	let first_frame_header = find_first_frame(&mut scanner, parse_options.parsing_mode)?;
	log::debug!("MPEG: Found first frame at offset {}", scanner.frame_start());

	let vbr_header = read_vbr_header(
		&mut scanner,
		&first_frame_header,
		parse_options.parsing_mode,
	)?;
	if vbr_header.is_incomplete() {
		log::debug!("MPEG: No usable VBR header, assuming CBR");
	}

	Ok(AudioInfo::new(
		&first_frame_header,
		vbr_header,
		scanner.frame_start(),
	))
}

// Searches for the first frame that is followed by another frame sync
//
// Anything that fails to decode or verify is skipped, and the search resumes one byte
// past its start.
fn find_first_frame<R>(
	scanner: &mut FrameScanner<'_, R>,
	parsing_mode: ParsingMode,
) -> Result<FrameHeader>
where
	R: Read + Seek,
{
	loop {
		let frame_start = scanner.seek_to_next_frame()?;

		let header = match FrameHeader::parse(scanner.read_header()?) {
			Ok(header) => header,
			Err(err) => {
				log::trace!("MPEG: Skipping frame sync at {frame_start}: {err}");
				scanner.skip_candidate()?;
				continue;
			},
		};

		let verified = match scanner.verify_frame_sync(&header) {
			Ok(verified) => verified,
			Err(StreamError::UnexpectedEnd(what)) => parse_mode_choice!(
				parsing_mode,
				RELAXED: false,
				DEFAULT: return Err(StreamError::UnexpectedEnd(what).into())
			),
			Err(err) => return Err(err.into()),
		};

		if verified {
			return Ok(header);
		}

		log::trace!("MPEG: Frame sync at {frame_start} is not followed by another frame");
		scanner.skip_candidate()?;
	}
}
