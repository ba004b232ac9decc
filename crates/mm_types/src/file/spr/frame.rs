//! Sprite frame descriptors and the run-length pixel decoder.
//!
//! A frame descriptor carries its dimensions, pivot point, palette selector
//! and two per-row offset tables. Pixel data is never buffered in the
//! container; [`Frame::pixels`] reconstructs a full RGBA raster on demand
//! from the still-open byte source.
//!
//! # Row Encoding
//!
//! Each row is keyed by a delta-table offset and a pixel-table offset, both
//! relative to the frame's start. The delta table holds alternating run
//! lengths, starting with a transparent run: even-parity runs emit fully
//! transparent pixels, odd-parity runs copy palette indices from the pixel
//! table, which advances one byte per color consumed.

use std::fmt;
use std::io::{Read, Seek};

use serde::Serialize;

use crate::file::spr::palette::{Color, Palette};
use crate::file::{MmFileError, Reader};

/// Sprite frame descriptor with per-row offset tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
	/// Absolute byte offset where this frame starts
	pub offset: u64,
	/// Declared byte size of the frame, trusted to find the next frame
	pub size: u32,
	/// Frame width in pixels
	pub width: u32,
	/// Frame height in pixels
	pub height: u32,
	/// Pivot point X coordinate
	pub centre_x: i32,
	/// Pivot point Y coordinate
	pub centre_y: i32,
	/// Frame name, trailing NULs trimmed
	pub name: String,
	/// Palette selector; out-of-range values fall back to palette 0
	pub palette_index: i32,
	/// Per-row run-length table offsets, frame-relative
	pub delta_offsets: Vec<u32>,
	/// Per-row pixel table offsets, frame-relative
	pub pixel_offsets: Vec<u32>,
}

impl Frame {
	/// Decodes one frame descriptor at the reader's current position.
	///
	/// Containers with version > 2 carry 8 reserved bytes between the
	/// palette index and the row tables.
	///
	/// # Errors
	///
	/// Returns [`MmFileError::TruncatedRead`] when the stream ends inside
	/// the descriptor or its row tables.
	pub fn from_reader<R: Read + Seek>(
		reader: &mut Reader<R>,
		version: u32,
	) -> Result<Self, MmFileError> {
		let offset = reader.position()?;

		let size = reader.u32()?;
		let width = reader.u32()?;
		let height = reader.u32()?;
		let centre_x = reader.i32()?;
		let centre_y = reader.i32()?;
		let name = reader.string(8)?;
		let palette_index = reader.i32()?;

		if version > 2 {
			reader.read_bytes(8)?;
		}

		let mut delta_offsets = Vec::with_capacity(height as usize);
		let mut pixel_offsets = Vec::with_capacity(height as usize);
		for _ in 0..height {
			delta_offsets.push(reader.u32()?);
			pixel_offsets.push(reader.u32()?);
		}

		Ok(Self {
			offset,
			size,
			width,
			height,
			centre_x,
			centre_y,
			name,
			palette_index,
			delta_offsets,
			pixel_offsets,
		})
	}

	/// Returns `true` when both dimensions are non-zero.
	///
	/// Frames failing this check cannot be rasterized; the game data does
	/// contain such placeholder frames.
	pub fn has_valid_dimensions(&self) -> bool {
		self.width > 0 && self.height > 0
	}

	/// Selects this frame's palette from a container's palette list.
	///
	/// Indices outside `[0, palettes.len())` fall back to palette 0.
	pub fn palette<'a>(&self, palettes: &'a [Palette]) -> Option<&'a Palette> {
		match usize::try_from(self.palette_index) {
			Ok(index) if index < palettes.len() => palettes.get(index),
			_ => palettes.first(),
		}
	}

	/// Reconstructs the frame's full RGBA raster from the byte source.
	///
	/// Returns `width × height × 4` bytes in row-major RGBA order.
	/// Transparent gaps decode as `(0, 0, 0, 0)`. Decoding is read-only and
	/// idempotent; the reader position afterwards is unspecified.
	///
	/// # Errors
	///
	/// Returns [`MmFileError::InvalidDimensions`] when width or height is
	/// zero, or [`MmFileError::TruncatedRead`] when a row table points past
	/// the end of the stream.
	pub fn pixels<R: Read + Seek>(
		&self,
		reader: &mut Reader<R>,
		palette: &Palette,
	) -> Result<Vec<u8>, MmFileError> {
		if !self.has_valid_dimensions() {
			return Err(MmFileError::InvalidDimensions {
				width: self.width,
				height: self.height,
			});
		}

		let height = self.height as usize;
		let mut raster = Vec::with_capacity(self.width as usize * height * 4);

		for row in 0..height {
			let delta_offset = self.delta_offsets[row];
			let pixel_offset = self.pixel_offsets[row];

			// The last row has no successor delta entry; its run table ends
			// where the first row's pixel table starts.
			let delta_end = if row + 1 == height {
				self.pixel_offsets[0]
			} else {
				self.delta_offsets[row + 1]
			};
			let run_count = delta_end.saturating_sub(delta_offset) as usize;

			reader.seek_to(self.offset + u64::from(delta_offset))?;
			let runs = reader.read_bytes(run_count)?;

			let mut consumed = 0u64;
			for (parity, &run) in runs.iter().enumerate() {
				if parity & 1 == 1 {
					reader.seek_to(self.offset + u64::from(pixel_offset) + consumed)?;
					let indices = reader.read_bytes(run as usize)?;
					consumed += u64::from(run);

					for index in indices {
						push_color(&mut raster, palette.get(index));
					}
				} else {
					for _ in 0..run {
						push_color(&mut raster, Color::transparent());
					}
				}
			}
		}

		Ok(raster)
	}
}

fn push_color(raster: &mut Vec<u8>, color: Color) {
	raster.extend_from_slice(&[color.r, color.g, color.b, color.a]);
}

impl fmt::Display for Frame {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"\"{}\" {}×{} (centre: {}, {}) palette {}",
			self.name, self.width, self.height, self.centre_x, self.centre_y, self.palette_index
		)
	}
}
