/// Options to control how MPEG streams are analyzed
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ParseOptions {
	pub(crate) parsing_mode: ParsingMode,
	pub(crate) max_junk_bytes: Option<u64>,
}

impl Default for ParseOptions {
	/// The default implementation for `ParseOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// ParseOptions {
	/// 	parsing_mode: ParsingMode::BestAttempt,
	/// 	max_junk_bytes: None,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

impl ParseOptions {
	/// Default parsing mode
	pub const DEFAULT_PARSING_MODE: ParsingMode = ParsingMode::BestAttempt;

	/// Creates a new `ParseOptions`, alias for `Default` implementation
	///
	/// See also: [`ParseOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use mp3_properties::config::ParseOptions;
	///
	/// let parsing_options = ParseOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			parsing_mode: Self::DEFAULT_PARSING_MODE,
			max_junk_bytes: None,
		}
	}

	/// The parsing mode to use, see [`ParsingMode`] for details
	///
	/// # Examples
	///
	/// ```rust
	/// use mp3_properties::config::{ParseOptions, ParsingMode};
	///
	/// // By default, `parsing_mode` is ParsingMode::BestAttempt. Here, we need absolute correctness.
	/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
	/// ```
	pub fn parsing_mode(&mut self, parsing_mode: ParsingMode) -> Self {
		self.parsing_mode = parsing_mode;
		*self
	}

	/// The maximum number of bytes to search for the first frame
	///
	/// The stream may start with junk bytes (tag padding remnants, partial frames, etc.). The search
	/// for the first valid frame will give up once it gets this far past the starting position.
	///
	/// By default, this is `None`, meaning the entire stream may be searched.
	///
	/// # Examples
	///
	/// ```rust
	/// use mp3_properties::config::ParseOptions;
	///
	/// // This stream comes from an untrusted source, don't scan forever
	/// let parsing_options = ParseOptions::new().max_junk_bytes(Some(64 * 1024));
	/// ```
	pub fn max_junk_bytes(&mut self, max_junk_bytes: Option<u64>) -> Self {
		self.max_junk_bytes = max_junk_bytes;
		*self
	}
}

/// The parsing strictness mode
///
/// This can be set with [`ParseOptions::parsing_mode`].
///
/// # Examples
///
/// ```rust,no_run
/// use mp3_properties::AudioInfo;
/// use mp3_properties::config::{ParseOptions, ParsingMode};
/// use std::fs::File;
///
/// # fn main() -> mp3_properties::error::Result<()> {
/// // We only want frames we can fully trust
/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
/// let mut file = File::open("foo.mp3")?;
/// let info = AudioInfo::read_from(&mut file, parsing_options)?;
/// # Ok(()) }
/// ```
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Default)]
#[non_exhaustive]
pub enum ParsingMode {
	/// Will be the most selective about which frames are trusted
	///
	/// ## Examples of behavior
	///
	/// * The frame found after a candidate must share its MPEG version, layer, and sample rate
	Strict,
	/// Default mode
	///
	/// ## Examples of behavior
	///
	/// * The frame found after a candidate only needs a valid frame sync
	/// * A Xing/VBRI header cut short by the end of the stream is an error
	#[default]
	BestAttempt,
	/// Least eager to error, may produce partial output
	///
	/// ## Examples of behavior
	///
	/// * A candidate whose following frame lies beyond the end of the stream is skipped,
	///   and the search continues
	/// * A Xing/VBRI header cut short by the end of the stream is treated as absent
	Relaxed,
}
