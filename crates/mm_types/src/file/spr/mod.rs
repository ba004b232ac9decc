//! `.SPR` / `.SFT` container format support for `mm-rs` project.
//!
//! SPR files hold sprite animations; SFT files hold font glyphs. Both share
//! one container layout — header, embedded palettes, frame descriptors —
//! and differ only in the header length and four reserved fields that feed
//! into the data-offset computation. One parse routine handles both,
//! parameterized by a thin [`Layout`] descriptor.
//!
//! # File Structure
//!
//! - **Header:** 4-byte signature, u32 declared total size (checked against
//!   the stream length), u32 version, u32 frame count, [SFT only: u32 × 4
//!   reserved], u32 palette count. 24 bytes for SPR, 40 for SFT.
//! - **Palettes:** `palette_count` × 768 bytes (256 × RGB) right after the
//!   header; zero palettes means one synthetic greyscale palette.
//! - **Frame descriptors:** starting at the computed data offset; each
//!   frame's declared size locates the next one.
//!
//! The container owns its palettes and frame descriptors but no pixel data;
//! rasters are decoded lazily, per frame, from the still-open byte source.

use std::fmt;
use std::io::{Read, Seek};
use std::path::Path;

use log::debug;

use crate::file::{Format, MmFileError, Reader};

pub mod frame;
pub mod palette;

pub use frame::Frame;
pub use palette::{Color, Palette};

/// Container layout descriptor distinguishing SPR from SFT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
	format: Format,
	header_size: u64,
	has_reserved: bool,
}

impl Layout {
	/// SPR sprite container layout (24-byte header).
	pub const SPR: Layout = Layout {
		format: Format::Spr,
		header_size: 24,
		has_reserved: false,
	};

	/// SFT font container layout (40-byte header with reserved fields).
	pub const SFT: Layout = Layout {
		format: Format::Sft,
		header_size: 40,
		has_reserved: true,
	};
}

/// Sprite or font container: header, palettes and frame descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
	format: Format,
	size: u32,
	version: u32,
	reserved: [u32; 4],
	data_offset: u64,
	palettes: Vec<Palette>,
	frames: Vec<Frame>,
}

impl File {
	/// Opens an SPR or SFT file, picking the layout from the extension.
	///
	/// Returns the parsed container together with the reader so frame
	/// rasters can still be decoded lazily.
	///
	/// # Errors
	///
	/// Returns an error when the extension is not `spr`/`sft`, or when the
	/// container structure is invalid.
	pub fn open(
		path: impl AsRef<Path>,
	) -> Result<(Self, Reader<std::io::BufReader<std::fs::File>>), MmFileError> {
		let path = path.as_ref();
		let layout = match path
			.extension()
			.and_then(std::ffi::OsStr::to_str)
			.and_then(Format::from_extension)
		{
			Some(Format::Sft) => Layout::SFT,
			_ => Layout::SPR,
		};

		let file = std::fs::File::open(path)?;
		let mut reader = Reader::new(std::io::BufReader::new(file));
		let parsed = Self::from_reader(&mut reader, &layout)?;
		Ok((parsed, reader))
	}

	/// Parses an SPR sprite container from a borrowed byte source.
	pub fn sprite_from_reader<R: Read + Seek>(
		reader: &mut Reader<R>,
	) -> Result<Self, MmFileError> {
		Self::from_reader(reader, &Layout::SPR)
	}

	/// Parses an SFT font container from a borrowed byte source.
	pub fn font_from_reader<R: Read + Seek>(reader: &mut Reader<R>) -> Result<Self, MmFileError> {
		Self::from_reader(reader, &Layout::SFT)
	}

	/// Parses a container with the given layout.
	///
	/// # Errors
	///
	/// Returns [`MmFileError::InvalidSignature`] on a tag mismatch,
	/// [`MmFileError::InvalidFileSize`] when the declared size differs from
	/// the stream length, or [`MmFileError::TruncatedRead`] when the stream
	/// ends inside a palette or frame descriptor.
	pub fn from_reader<R: Read + Seek>(
		reader: &mut Reader<R>,
		layout: &Layout,
	) -> Result<Self, MmFileError> {
		reader.seek_to(0)?;
		layout.format.verify_signature(reader)?;

		let size = reader.u32()?;
		let actual = reader.stream_len()?;
		if u64::from(size) != actual {
			return Err(MmFileError::InvalidFileSize {
				declared: size,
				actual,
			});
		}

		reader.seek_to(8)?;
		let version = reader.u32()?;
		let frame_count = reader.u32()?;

		let mut reserved = [0u32; 4];
		if layout.has_reserved {
			for slot in &mut reserved {
				*slot = reader.u32()?;
			}
		}

		let palette_count = reader.u32()?;

		debug!(
			"{} header: size={size} version={version} frames={frame_count} \
			 palettes={palette_count}",
			layout.format
		);

		reader.seek_to(layout.header_size)?;

		let palettes = if palette_count == 0 {
			vec![Palette::greyscale()]
		} else {
			let mut palettes = Vec::with_capacity(palette_count as usize);
			for _ in 0..palette_count {
				palettes.push(Palette::from_reader(reader)?);
			}
			palettes
		};

		// Frame metadata begins past the palettes and a per-frame table
		// whose stride grows with the reserved fields (SFT only).
		let reserved_sum: u64 = reserved.iter().map(|&v| u64::from(v)).sum();
		let data_offset = layout.header_size
			+ u64::from(palette_count) * Palette::SIZE as u64 * 3
			+ u64::from(frame_count) * 4
			+ reserved_sum * u64::from(frame_count) * 4;

		reader.seek_to(data_offset)?;

		// Version 2 containers start their first frame 4 bytes early.
		if version == 2 {
			reader.seek_by(-4)?;
		}

		let mut frames = Vec::with_capacity(frame_count as usize);
		for i in 0..frame_count {
			let frame = Frame::from_reader(reader, version)?;

			// Frames are not contiguous with their row tables; the declared
			// size, not the computed table end, locates the next frame.
			if i + 1 < frame_count {
				reader.seek_to(frame.offset + u64::from(frame.size))?;
			}

			frames.push(frame);
		}

		Ok(Self {
			format: layout.format,
			size,
			version,
			reserved,
			data_offset,
			palettes,
			frames,
		})
	}

	/// Returns the container format (SPR or SFT).
	pub fn format(&self) -> Format {
		self.format
	}

	/// Returns the total file size recorded in the header.
	pub fn size(&self) -> u32 {
		self.size
	}

	/// Returns the format version.
	pub fn version(&self) -> u32 {
		self.version
	}

	/// Returns the four reserved header fields (always zero for SPR).
	pub fn reserved(&self) -> &[u32; 4] {
		&self.reserved
	}

	/// Returns the computed byte offset where frame metadata begins.
	pub fn data_offset(&self) -> u64 {
		self.data_offset
	}

	/// Returns the embedded palettes, or the greyscale fallback.
	pub fn palettes(&self) -> &[Palette] {
		&self.palettes
	}

	/// Returns the frame descriptors in file order.
	pub fn frames(&self) -> &[Frame] {
		&self.frames
	}

	/// Returns a frame descriptor by index.
	pub fn get_frame(&self, index: usize) -> Option<&Frame> {
		self.frames.get(index)
	}

	/// Returns an iterator over the frame descriptors.
	pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
		self.frames.iter()
	}

	/// Decodes one frame's RGBA raster, resolving its palette first.
	///
	/// # Errors
	///
	/// Returns [`MmFileError::InvalidDimensions`] for frames with a zero
	/// dimension; decoding errors propagate from [`Frame::pixels`].
	pub fn frame_pixels<R: Read + Seek>(
		&self,
		index: usize,
		reader: &mut Reader<R>,
	) -> Result<Vec<u8>, MmFileError> {
		let frame = &self.frames[index];
		let palette = frame.palette(&self.palettes).ok_or_else(|| {
			std::io::Error::new(std::io::ErrorKind::InvalidData, "container has no palettes")
		})?;

		frame.pixels(reader, palette)
	}
}

impl<'a> IntoIterator for &'a File {
	type Item = &'a Frame;
	type IntoIter = std::slice::Iter<'a, Frame>;

	fn into_iter(self) -> Self::IntoIter {
		self.frames.iter()
	}
}

impl fmt::Display for File {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} File: version {}, {} frames, {} palettes",
			self.format,
			self.version,
			self.frames.len(),
			self.palettes.len()
		)
	}
}
