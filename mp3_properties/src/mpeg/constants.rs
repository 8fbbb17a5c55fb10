// Layer III bitrates (kbps), indexed by [version_index][bitrate_index]
//
// Index 0 is the "free" bitrate, index 15 is reserved.
pub(super) const BITRATES: [[u32; 16]; 2] = [
	// MPEG-1
	[
		0, 32, 40, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320, 0,
	],
	// MPEG-2 and MPEG-2.5
	[
		0, 8, 16, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 144, 160, 0,
	],
];

// Indexed by [MpegVersion as usize][sample_rate_index]
pub(super) const SAMPLE_RATES: [[u32; 3]; 3] = [
	[44100, 48000, 32000],
	[22050, 24000, 16000],
	[11025, 12000, 8000],
];

// Indexed by [version_index][is_mono]
pub(super) const SIDE_INFORMATION_SIZES: [[u32; 2]; 2] = [[32, 17], [17, 9]];

// Indexed by [version_index]
pub(super) const SAMPLES: [u16; 2] = [1152, 576];

pub(super) const HEADER_SIZE: u32 = 4;

// The VBRI header always sits 32 bytes past the end of the frame header
pub(super) const VBRI_HEADER_OFFSET: u64 = 36;
