#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use mp3_properties::AudioInfo;
use mp3_properties::config::{ParseOptions, ParsingMode};

fuzz_target!(|data: Vec<u8>| {
	for parsing_mode in [ParsingMode::Strict, ParsingMode::BestAttempt, ParsingMode::Relaxed] {
		let options = ParseOptions::new().parsing_mode(parsing_mode);
		let _ = AudioInfo::read_from(&mut Cursor::new(&data), options);
	}
});
