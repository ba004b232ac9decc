//! Frame records for ANI animation scripts.

use std::fmt;
use std::io::{Read, Seek};

use serde::Serialize;

use crate::file::{MmFileError, Reader};

/// Frame type discriminant, branching the payload encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FrameType {
	/// Sprite frame; the payload is an 8-byte sprite frame name
	Sprite,
	/// Any other code; the payload is a pair of signed scalars
	Other(u32),
}

impl FrameType {
	/// Maps a raw frame-type code to its enum value.
	pub fn from_code(code: u32) -> Self {
		match code {
			0 => Self::Sprite,
			other => Self::Other(other),
		}
	}

	/// Returns the raw code this value was decoded from.
	pub fn code(&self) -> u32 {
		match self {
			Self::Sprite => 0,
			Self::Other(code) => *code,
		}
	}
}

/// Type-dependent frame payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Payload {
	/// Sprite frame name, trailing NULs trimmed
	Name(String),
	/// Two signed scalars of unknown meaning
	Values(i32, i32),
}

impl Payload {
	/// Renders the payload the way the reference tables present it: the name
	/// verbatim, `"A B"` for scalar pairs, and an empty string when both
	/// scalars are zero.
	pub fn label(&self) -> String {
		match self {
			Self::Name(name) => name.clone(),
			Self::Values(0, 0) => String::new(),
			Self::Values(a, b) => format!("{a} {b}"),
		}
	}
}

impl fmt::Display for Payload {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.label())
	}
}

/// A single animation frame record (44 bytes on disk).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
	/// Absolute byte offset where this record starts
	pub offset: u64,
	/// 1-based animation group index
	pub group: u32,
	/// 1-based frame index within the group
	pub index: u32,
	/// Frame type, selecting the payload encoding
	pub frame_type: FrameType,
	/// Frame entry value
	pub entry: i32,
	/// First unknown scalar
	pub data1: i32,
	/// Second unknown scalar
	pub data2: i32,
	/// Sprite name or scalar pair, depending on frame type
	pub payload: Payload,
	/// Four unknown signed byte fields
	pub flags: [i8; 4],
	/// Four unknown signed 32-bit fields
	pub params: [i32; 4],
	/// Whether this is the last frame of its group (presentation only)
	pub last_in_group: bool,
}

impl Frame {
	/// Decodes one frame record at the reader's current position.
	///
	/// # Errors
	///
	/// Returns [`MmFileError::TruncatedRead`] when the stream ends inside
	/// the record.
	pub fn from_reader<R: Read + Seek>(
		reader: &mut Reader<R>,
		group: u32,
		index: u32,
		last_in_group: bool,
	) -> Result<Self, MmFileError> {
		let offset = reader.position()?;

		let frame_type = FrameType::from_code(reader.u32()?);
		let entry = reader.i32()?;
		let data1 = reader.i32()?;
		let data2 = reader.i32()?;

		let payload = match frame_type {
			FrameType::Sprite => Payload::Name(reader.string(8)?),
			FrameType::Other(_) => Payload::Values(reader.i32()?, reader.i32()?),
		};

		let mut flags = [0i8; 4];
		for slot in &mut flags {
			*slot = reader.i8()?;
		}

		let mut params = [0i32; 4];
		for slot in &mut params {
			*slot = reader.i32()?;
		}

		Ok(Self {
			offset,
			group,
			index,
			frame_type,
			entry,
			data1,
			data2,
			payload,
			flags,
			params,
			last_in_group,
		})
	}
}

impl fmt::Display for Frame {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"group {} frame {}: type {} entry {} \"{}\"",
			self.group,
			self.index,
			self.frame_type.code(),
			self.entry,
			self.payload.label()
		)
	}
}
