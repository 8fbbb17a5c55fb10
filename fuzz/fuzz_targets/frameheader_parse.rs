#![no_main]

use libfuzzer_sys::fuzz_target;
use mp3_properties::mpeg::FrameHeader;

fuzz_target!(|data: [u8; 4]| {
	if let Ok(header) = FrameHeader::parse(data) {
		let _ = header.frame_len();
	}
});
