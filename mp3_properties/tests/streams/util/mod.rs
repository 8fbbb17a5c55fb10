//! Builders for synthetic MPEG streams

/// MPEG-1 Layer III, 128 kbps, 44.1 kHz, stereo
pub const MPEG1_STEREO: Frame = Frame {
	header: [0xFF, 0xFB, 0x90, 0x00],
	len: 417,
	side_info_len: 32,
};

/// MPEG-1 Layer III, 128 kbps, 44.1 kHz, mono, padded
pub const MPEG1_MONO_PADDED: Frame = Frame {
	header: [0xFF, 0xFB, 0x92, 0xC0],
	len: 418,
	side_info_len: 17,
};

/// MPEG-2 Layer III, 64 kbps, 24 kHz, mono
pub const MPEG2_MONO: Frame = Frame {
	header: [0xFF, 0xF3, 0x84, 0xC0],
	len: 192,
	side_info_len: 9,
};

/// MPEG-2.5 Layer III, 32 kbps, 11.025 kHz, stereo
pub const MPEG2_5_STEREO: Frame = Frame {
	header: [0xFF, 0xE3, 0x40, 0x00],
	len: 208,
	side_info_len: 17,
};

#[derive(Copy, Clone, Debug)]
pub struct Frame {
	pub header: [u8; 4],
	pub len: usize,
	pub side_info_len: usize,
}

impl Frame {
	/// The frame bytes, with a payload that never contains a frame sync
	pub fn bytes(&self) -> Vec<u8> {
		let mut frame = vec![0; self.len];
		frame[..4].copy_from_slice(&self.header);
		frame
	}

	/// The frame bytes, with a Xing/Info header after the side information
	pub fn with_xing(&self, id: &[u8; 4], frames: Option<u32>, bytes: Option<u32>) -> Vec<u8> {
		let mut flags = 0_u32;
		let mut fields = Vec::new();
		if let Some(frames) = frames {
			flags |= 0x1;
			fields.extend(frames.to_be_bytes());
		}
		if let Some(bytes) = bytes {
			flags |= 0x2;
			fields.extend(bytes.to_be_bytes());
		}

		let mut xing = id.to_vec();
		xing.extend(flags.to_be_bytes());
		xing.extend(fields);

		let mut frame = self.bytes();
		let start = 4 + self.side_info_len;
		frame[start..start + xing.len()].copy_from_slice(&xing);
		frame
	}

	/// The frame bytes, with a VBRI header 36 bytes in
	pub fn with_vbri(&self, bytes: u32, frames: u32) -> Vec<u8> {
		let mut vbri = b"VBRI".to_vec();
		// Version, delay, quality
		vbri.extend([0x00, 0x01, 0x3C, 0x00, 0x00, 0x4B]);
		vbri.extend(bytes.to_be_bytes());
		vbri.extend(frames.to_be_bytes());

		let mut frame = self.bytes();
		frame[36..36 + vbri.len()].copy_from_slice(&vbri);
		frame
	}

	/// `count` plain frames
	pub fn repeat(&self, count: usize) -> Vec<u8> {
		let mut data = Vec::with_capacity(self.len * count);
		for _ in 0..count {
			data.extend(self.bytes());
		}

		data
	}
}

/// Concatenate stream pieces
pub fn stream(pieces: &[&[u8]]) -> Vec<u8> {
	pieces.concat()
}
