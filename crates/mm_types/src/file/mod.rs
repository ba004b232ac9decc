//! File type support for `mm-rs` project.
//!
//! Each Magic & Mayhem file format lives in its own module; the [`Format`]
//! registry maps extensions and sniffed signatures to the right parser.

mod error;
mod reader;

pub mod ani;
pub mod catalog;
pub mod evt;
pub mod mps;
pub mod spr;

use std::fmt;
use std::io::{Read, Seek};

// Re-export unified error type and byte reader
pub use error::MmFileError;
pub use reader::Reader;

// Re-export main file types
pub use ani::{File as AniFile, Frame as AniFrame, FrameType as AniFrameType};
pub use evt::{Event, File as EvtFile};
pub use mps::{Element, ElementKind, ElementRef, File as MpsFile};
pub use spr::{Color, File as SprFile, Frame as SprFrame, Layout as SprLayout, Palette};

/// Known file formats, keyed by signature and extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
	/// Animation script
	Ani,
	/// Event table
	Evt,
	/// Map placement table
	Mps,
	/// Sprite container
	Spr,
	/// Font container
	Sft,
}

impl Format {
	/// All known formats, in dispatch order.
	pub const ALL: [Format; 5] = [Format::Ani, Format::Evt, Format::Mps, Format::Spr, Format::Sft];

	/// Returns the format's 4-byte signature tag.
	pub const fn signature(&self) -> [u8; 4] {
		match self {
			Format::Ani => *b"ANI\0",
			Format::Evt => *b"EVT\0",
			Format::Mps => *b"MPS\0",
			Format::Spr => *b"SPR\0",
			Format::Sft => *b"SFT\0",
		}
	}

	/// Returns the conventional lowercase file extension.
	pub const fn extension(&self) -> &'static str {
		match self {
			Format::Ani => "ani",
			Format::Evt => "evt",
			Format::Mps => "mps",
			Format::Spr => "spr",
			Format::Sft => "sft",
		}
	}

	/// Looks a format up by file extension, case-insensitively.
	pub fn from_extension(ext: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|f| f.extension().eq_ignore_ascii_case(ext))
	}

	/// Looks a format up by its 4-byte signature tag.
	pub fn from_signature(signature: [u8; 4]) -> Option<Self> {
		Self::ALL.into_iter().find(|f| f.signature() == signature)
	}

	/// Sniffs the format from the signature at the start of the stream.
	///
	/// Returns `None` for an unrecognized tag. Streams shorter than 4 bytes
	/// fail with [`MmFileError::TruncatedRead`].
	pub fn sniff<R: Read + Seek>(reader: &mut Reader<R>) -> Result<Option<Self>, MmFileError> {
		reader.seek_to(0)?;
		Ok(Self::from_signature(reader.read_array::<4>()?))
	}

	/// Reads a 4-byte tag at the current position, requiring this format's
	/// signature.
	///
	/// # Errors
	///
	/// Returns [`MmFileError::InvalidSignature`] on a mismatch.
	pub fn verify_signature<R: Read + Seek>(
		&self,
		reader: &mut Reader<R>,
	) -> Result<(), MmFileError> {
		let actual = reader.read_array::<4>()?;
		if actual != self.signature() {
			return Err(MmFileError::InvalidSignature {
				expected: self.signature(),
				actual,
			});
		}
		Ok(())
	}

	/// Dispatches to this format's parser.
	pub fn parse<R: Read + Seek>(&self, reader: &mut Reader<R>) -> Result<Parsed, MmFileError> {
		match self {
			Format::Ani => ani::File::from_reader(reader).map(Parsed::Ani),
			Format::Evt => evt::File::from_reader(reader).map(Parsed::Evt),
			Format::Mps => mps::File::from_reader(reader).map(Parsed::Mps),
			Format::Spr => spr::File::sprite_from_reader(reader).map(Parsed::Spr),
			Format::Sft => spr::File::font_from_reader(reader).map(Parsed::Sft),
		}
	}
}

impl fmt::Display for Format {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Format::Ani => write!(f, "ANI"),
			Format::Evt => write!(f, "EVT"),
			Format::Mps => write!(f, "MPS"),
			Format::Spr => write!(f, "SPR"),
			Format::Sft => write!(f, "SFT"),
		}
	}
}

/// A file parsed through the [`Format`] registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
	/// Parsed animation script
	Ani(ani::File),
	/// Parsed event table
	Evt(evt::File),
	/// Parsed map placement table
	Mps(mps::File),
	/// Parsed sprite container
	Spr(spr::File),
	/// Parsed font container
	Sft(spr::File),
}

impl Parsed {
	/// Returns the format this file was parsed as.
	pub fn format(&self) -> Format {
		match self {
			Parsed::Ani(_) => Format::Ani,
			Parsed::Evt(_) => Format::Evt,
			Parsed::Mps(_) => Format::Mps,
			Parsed::Spr(_) => Format::Spr,
			Parsed::Sft(_) => Format::Sft,
		}
	}
}
