use crate::util::{MPEG1_STEREO, MPEG2_MONO, stream};

use mp3_properties::AudioInfo;
use mp3_properties::config::ParseOptions;
use mp3_properties::error::{ErrorKind, StreamError};
use mp3_properties::mpeg::MpegVersion;

use std::io::{Cursor, Read, Seek, SeekFrom};

#[test_log::test]
fn skips_false_sync_in_payload() {
	// A valid looking MPEG-1 header sitting in junk. Its computed frame length lands on zeroes.
	let mut junk = vec![0x00; 50];
	junk[10..14].copy_from_slice(&MPEG1_STEREO.header);

	let data = stream(&[&junk, &MPEG2_MONO.repeat(3)]);
	let info = mp3_properties::read_from(&mut Cursor::new(data)).unwrap();

	assert_eq!(info.first_frame_offset(), 50);
	assert_eq!(info.version(), MpegVersion::V2);
	assert_eq!(info.sample_rate(), 24000);
	assert_eq!(info.channels(), 1);
	assert_eq!(info.bitrate(), 64_000);
}

#[test_log::test]
fn skips_other_layers() {
	// 0xFF 0xFF decodes as Layer I
	let data = stream(&[&[0xFF; 4], &MPEG2_MONO.repeat(2)]);
	let info = mp3_properties::read_from(&mut Cursor::new(data)).unwrap();

	assert_eq!(info.first_frame_offset(), 4);
	assert_eq!(info.sample_rate(), 24000);
}

#[test_log::test]
fn overlapping_sync_candidates() {
	// The false candidate's header overlaps the real frame's sync
	let data = stream(&[&[0xFF], &MPEG1_STEREO.repeat(2)]);
	let info = mp3_properties::read_from(&mut Cursor::new(data)).unwrap();

	assert_eq!(info.first_frame_offset(), 1);
	assert_eq!(info.sample_rate(), 44100);
}

#[test_log::test]
fn garbage_stream() {
	fn assert_not_mp3(data: Vec<u8>) {
		let err = mp3_properties::read_from(&mut Cursor::new(data)).unwrap_err();

		let ErrorKind::InvalidAudio(invalid) = err.kind() else {
			panic!("Expected invalid audio, got: {err:?}");
		};
		assert!(matches!(
			invalid.cause(),
			Some(StreamError::UnexpectedEnd(_))
		));
	}

	assert_not_mp3(Vec::new());
	assert_not_mp3((0..=0xFE).cycle().take(4096).collect());
	assert_not_mp3(vec![0xFF; 3]);

	// A lone frame can never be verified
	assert_not_mp3(MPEG1_STEREO.bytes());
}

#[test_log::test]
fn junk_limit() {
	let data = stream(&[&[0x00; 1000], &MPEG1_STEREO.repeat(2)]);

	let options = ParseOptions::new().max_junk_bytes(Some(100));
	let err = AudioInfo::read_from(&mut Cursor::new(data.clone()), options).unwrap_err();
	let ErrorKind::InvalidAudio(invalid) = err.kind() else {
		panic!("Expected invalid audio, got: {err:?}");
	};
	assert!(matches!(invalid.cause(), Some(StreamError::ScanLimitReached)));

	let options = ParseOptions::new().max_junk_bytes(Some(1000));
	let info = AudioInfo::read_from(&mut Cursor::new(data), options).unwrap();
	assert_eq!(info.first_frame_offset(), 1000);
}

struct BrokenPipe;

impl Read for BrokenPipe {
	fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
		Err(std::io::ErrorKind::BrokenPipe.into())
	}
}

impl Seek for BrokenPipe {
	fn seek(&mut self, _: SeekFrom) -> std::io::Result<u64> {
		Ok(0)
	}
}

#[test_log::test]
fn io_errors_are_not_format_errors() {
	let err = mp3_properties::read_from(&mut BrokenPipe).unwrap_err();

	assert!(!err.is_invalid_audio());
	let ErrorKind::Io(io_err) = err.kind() else {
		panic!("Expected an I/O error, got: {err:?}");
	};
	assert_eq!(io_err.kind(), std::io::ErrorKind::BrokenPipe);
}
