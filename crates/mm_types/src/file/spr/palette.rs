//! Palette support for sprite and font containers.
//!
//! SPR/SFT containers embed zero or more 256-entry RGB palettes directly
//! after the header (3 bytes per entry, alpha implied opaque). A container
//! declaring zero palettes falls back to a synthetic greyscale table.

use std::fmt;
use std::io::{Read, Seek};

use crate::file::{MmFileError, Reader};

/// RGBA color representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
	/// Red component (0-255)
	pub r: u8,
	/// Green component (0-255)
	pub g: u8,
	/// Blue component (0-255)
	pub b: u8,
	/// Alpha component (0-255)
	pub a: u8,
}

impl Color {
	/// Creates a new RGBA color.
	pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
		Self {
			r,
			g,
			b,
			a,
		}
	}

	/// Creates a new RGB color with full opacity.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self::new(r, g, b, 255)
	}

	/// Creates a new greyscale color.
	pub const fn grey(value: u8) -> Self {
		Self::rgb(value, value, value)
	}

	/// Creates a fully transparent black color, used for run-length gaps.
	pub const fn transparent() -> Self {
		Self::new(0, 0, 0, 0)
	}
}

impl Default for Color {
	fn default() -> Self {
		Self::transparent()
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "RGBA({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Indexed 256-entry color lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
	colors: [Color; Self::SIZE],
}

impl Palette {
	/// Number of entries in a palette
	pub const SIZE: usize = 256;

	/// Reads one palette (256 × RGB bytes) at the reader's current position.
	///
	/// Alpha is forced to fully opaque; transparency only ever comes from
	/// the run-length gaps in the pixel decoder.
	///
	/// # Errors
	///
	/// Returns [`MmFileError::TruncatedRead`] when fewer than 768 bytes
	/// remain.
	pub fn from_reader<R: Read + Seek>(reader: &mut Reader<R>) -> Result<Self, MmFileError> {
		let raw = reader.read_bytes(Self::SIZE * 3)?;

		let mut colors = [Color::transparent(); Self::SIZE];
		for (i, rgb) in raw.chunks_exact(3).enumerate() {
			colors[i] = Color::rgb(rgb[0], rgb[1], rgb[2]);
		}

		Ok(Self {
			colors,
		})
	}

	/// Creates the synthetic greyscale fallback palette, where entry `i` is
	/// the grey level `i`.
	pub fn greyscale() -> Self {
		let mut colors = [Color::transparent(); Self::SIZE];
		for (i, color) in colors.iter_mut().enumerate() {
			*color = Color::grey(i as u8);
		}

		Self {
			colors,
		}
	}

	/// Gets a color by index.
	#[inline]
	pub fn get(&self, index: u8) -> Color {
		self.colors[index as usize]
	}

	/// Returns a reference to the color array.
	#[inline]
	pub fn colors(&self) -> &[Color; Self::SIZE] {
		&self.colors
	}

	/// Returns an iterator over palette colors.
	pub fn iter(&self) -> impl Iterator<Item = &Color> {
		self.colors.iter()
	}
}

impl std::ops::Index<u8> for Palette {
	type Output = Color;

	fn index(&self, index: u8) -> &Self::Output {
		&self.colors[index as usize]
	}
}

impl fmt::Display for Palette {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Palette: {} colors", Self::SIZE)
	}
}
