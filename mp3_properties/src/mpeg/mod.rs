//! MPEG Layer III frame and stream items
//!
//! ## Locating the first frame
//!
//! A frame sync (11 set bits) can show up by chance in audio data or junk bytes. A candidate is only
//! trusted if its computed frame length leads to another frame sync (see
//! [`FrameScanner::verify_frame_sync`]). Anything else is skipped, and the search continues.
//!
//! ## Stream totals
//!
//! Encoders may declare the total frame and byte counts in a Xing/Info or VBRI header within the
//! first frame. Without both totals, the stream is assumed to be CBR and its length is unknown.
mod constants;
pub(crate) mod error;
mod header;
mod properties;
mod read;
mod scanner;
mod vbr;

pub use header::{ChannelMode, FrameHeader, Layer, MpegVersion};
pub use properties::AudioInfo;
pub use scanner::FrameScanner;
pub use vbr::{VbrHeader, VbrHeaderType, read_vbr_header, read_vbri, read_xing};
