use crate::util::{MPEG1_MONO_PADDED, MPEG1_STEREO, MPEG2_5_STEREO, MPEG2_MONO, stream};

use mp3_properties::AudioInfo;
use mp3_properties::config::ParseOptions;
use mp3_properties::mpeg::{MpegVersion, VbrHeaderType};

use std::io::Cursor;
use std::time::Duration;

fn read(data: Vec<u8>) -> AudioInfo {
	mp3_properties::read_from(&mut Cursor::new(data)).unwrap()
}

#[test_log::test]
fn recovers_parameters_at_any_offset() {
	let cases = [
		(MPEG1_STEREO, MpegVersion::V1, 44100, 2),
		(MPEG1_MONO_PADDED, MpegVersion::V1, 44100, 1),
		(MPEG2_MONO, MpegVersion::V2, 24000, 1),
		(MPEG2_5_STEREO, MpegVersion::V2_5, 11025, 2),
	];

	for (frame, version, sample_rate, channels) in cases {
		for junk_len in [0, 1, 3, 100] {
			let junk = vec![0x12; junk_len];
			let info = read(stream(&[&junk, &frame.repeat(3)]));

			assert_eq!(info.first_frame_offset(), junk_len as u64);
			assert_eq!(info.version(), version);
			assert_eq!(info.sample_rate(), sample_rate);
			assert_eq!(info.channels(), channels);
			assert_eq!(info.format(), "MP3");
		}
	}
}

#[test_log::test]
fn no_vbr_header_assumes_cbr() {
	let info = read(MPEG1_STEREO.repeat(2));

	assert_eq!(info.bitrate(), 128 * 1000);
	assert_eq!(info.sample_count(), 0);
	assert_eq!(info.duration(), Duration::ZERO);
	assert_eq!(info.vbr_header(), None);

	let info = read(MPEG2_5_STEREO.repeat(2));
	assert_eq!(info.bitrate(), 32 * 1000);
	assert_eq!(info.sample_count(), 0);
}

#[test_log::test]
fn xing_header() {
	let first_frame = MPEG1_MONO_PADDED.with_xing(b"Xing", Some(100), Some(1_000_000));
	let info = read(stream(&[&first_frame, &MPEG1_MONO_PADDED.bytes()]));

	// round(1000000 * 8 / (100 * 1152 / 44100))
	assert_eq!(info.bitrate(), 3_062_500);
	assert_eq!(info.sample_count(), 115_200);
	assert_eq!(info.vbr_header(), Some(VbrHeaderType::Xing));
	assert_eq!(info.duration(), Duration::from_millis(2612));
}

#[test_log::test]
fn info_header() {
	let first_frame = MPEG2_MONO.with_xing(b"Info", Some(1000), Some(192_000));
	let info = read(stream(&[&first_frame, &MPEG2_MONO.repeat(2)]));

	// 192000 bytes over 1000 * 576 samples at 24 kHz
	assert_eq!(info.bitrate(), 64_000);
	assert_eq!(info.sample_count(), 576_000);
	assert_eq!(info.vbr_header(), Some(VbrHeaderType::Info));
}

#[test_log::test]
fn xing_with_frames_only() {
	let first_frame = MPEG1_STEREO.with_xing(b"Xing", Some(50), None);
	let info = read(stream(&[&first_frame, &MPEG1_STEREO.bytes()]));

	// No byte count, so the frame bitrate is all we have
	assert_eq!(info.bitrate(), 128_000);
	assert_eq!(info.sample_count(), 57_600);
}

#[test_log::test]
fn vbri_fallback() {
	let first_frame = MPEG1_STEREO.with_vbri(1_000_000, 100);
	let info = read(stream(&[&[0x00; 5], &first_frame, &MPEG1_STEREO.bytes()]));

	assert_eq!(info.bitrate(), 3_062_500);
	assert_eq!(info.sample_count(), 115_200);
	assert_eq!(info.vbr_header(), Some(VbrHeaderType::Vbri));
	assert_eq!(info.first_frame_offset(), 5);
}

#[test_log::test]
fn options_do_not_change_clean_streams() {
	use mp3_properties::config::ParsingMode;

	let first_frame = MPEG1_STEREO.with_xing(b"Xing", Some(100), Some(1_000_000));
	let data = stream(&[&first_frame, &MPEG1_STEREO.repeat(2)]);

	let expected = read(data.clone());
	for parsing_mode in [ParsingMode::Strict, ParsingMode::BestAttempt, ParsingMode::Relaxed] {
		let options = ParseOptions::new()
			.parsing_mode(parsing_mode)
			.max_junk_bytes(Some(0));
		let info = AudioInfo::read_from(&mut Cursor::new(data.clone()), options).unwrap();
		assert_eq!(info, expected);
	}
}
