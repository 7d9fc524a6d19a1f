//! Trace log parsing.
//!
//! Each line of a trace log encodes a single memory access as
//! `<mode-tag><address-field><2 trailing chars>`, e.g. `I04111000,4`.
//! The page identifier is carved out of the address field by
//! [`derive_page`].

// Imports
use {anyhow::Context, std::io};

/// Minimum characters in a trace line: mode tag + trailing size field
pub const MIN_LINE_LEN: usize = 3;

/// Trace reader
///
/// Pulls one [`Record`] per line from the underlying reader.
#[derive(Debug)]
pub struct TraceReader<R> {
	/// Reader
	reader: R,

	/// Line buffer
	line: String,

	/// Current line number (1-based)
	cur_line: usize,
}

impl<R: io::BufRead> TraceReader<R> {
	/// Creates a new trace reader
	pub fn new(reader: R) -> Self {
		Self {
			reader,
			line: String::new(),
			cur_line: 0,
		}
	}

	/// Reads the next record.
	///
	/// Returns `Ok(None)` once the underlying reader is exhausted.
	pub fn read_next(&mut self) -> Result<Option<Record>, anyhow::Error> {
		self.line.clear();
		let len = self.reader.read_line(&mut self.line).context("Unable to read line")?;
		if len == 0 {
			return Ok(None);
		}
		self.cur_line += 1;

		let record = Record::from_line(&self.line)
			.with_context(|| format!("Unable to parse line {}", self.cur_line))?;
		Ok(Some(record))
	}
}

/// Trace record
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Record {
	/// Mode tag
	pub mode: Mode,

	/// Page identifier
	pub page: String,
}

impl Record {
	/// Parses a record from a trace line.
	pub fn from_line(line: &str) -> Result<Self, anyhow::Error> {
		let line = line.trim();

		// Tag, address field and trailing size must all be present
		anyhow::ensure!(
			line.chars().count() >= MIN_LINE_LEN,
			"Trace line too short: {line:?}"
		);

		let tag = line.chars().next().expect("Line had at least 3 characters");
		let address_field = self::strip_chars(line, 1, 2)
			.expect("Line had at least 3 characters")
			.trim();
		let page = self::derive_page(address_field)
			.with_context(|| format!("Unable to derive page from address field {address_field:?}"))?;

		Ok(Self {
			mode: Mode::from_tag(tag),
			page: page.to_owned(),
		})
	}
}

/// Record mode
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Mode {
	/// Instruction fetch
	Instruction,

	/// Memory load
	Load,

	/// Memory store
	Store,

	/// Memory modify (load + store)
	Modify,

	/// Unrecognized mode tag
	Other(char),
}

impl Mode {
	/// Parses a mode from its tag character
	pub fn from_tag(tag: char) -> Self {
		match tag {
			'I' => Self::Instruction,
			'L' => Self::Load,
			'S' => Self::Store,
			'M' => Self::Modify,
			tag => Self::Other(tag),
		}
	}
}

/// Derives the page identifier from an address field.
///
/// The field's first character and last 3 characters are framing and the
/// in-page offset, and are discarded; the remainder identifies the page.
pub fn derive_page(address_field: &str) -> Result<&str, anyhow::Error> {
	self::strip_chars(address_field, 1, 3).with_context(|| format!("Address field too short: {address_field:?}"))
}

/// Strips `front` characters from the start of `s` and `back` characters from the end.
///
/// Returns `None` if `s` has fewer than `front + back` characters.
fn strip_chars(s: &str, front: usize, back: usize) -> Option<&str> {
	let len = s.chars().count();
	if len < front + back {
		return None;
	}

	let start = s.char_indices().nth(front).map_or(s.len(), |(idx, _)| idx);
	let end = s.char_indices().nth(len - back).map_or(s.len(), |(idx, _)| idx);
	Some(&s[start..end])
}
