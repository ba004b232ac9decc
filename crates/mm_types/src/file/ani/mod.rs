//! `.ANI` file format support for `mm-rs` project.
//!
//! ANI files are animation scripts: an ordered set of animation groups, each
//! holding a run of frame records that reference frames in an associated
//! sprite container.
//!
//! # File Structure
//!
//! - **Header (44 bytes):** 4-byte signature `"ANI\0"`, u32 declared file
//!   size, u32 total frame count, u32 version, u32 unknown, u32 group count,
//!   20-byte associated sprite name
//! - **Marker table:** `anim_count` u32 cumulative frame-count markers
//! - **Frame records:** 44 bytes each, concatenated group by group
//!
//! Group `i` spans `markers[i + 1] - markers[i]` frames. The marker table has
//! no successor entry for the final group, so its length is derived from the
//! header's total frame count instead: `frame_count - markers[anim_count - 1]`.

use std::fmt;
use std::io::{Read, Seek};
use std::path::Path;

use log::debug;

use crate::file::{Format, MmFileError, Reader};

pub mod frame;

pub use frame::{Frame, FrameType, Payload};

/// Size of the associated sprite name field in bytes
const SPRITE_NAME_SIZE: usize = 20;

/// ANI file structure, representing a complete animation script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
	size: u32,
	frame_count: u32,
	version: u32,
	unknown1: u32,
	anim_count: u32,
	sprite_name: String,
	markers: Vec<u32>,
	frames: Vec<Frame>,
}

impl File {
	/// Opens an ANI file from the specified path.
	///
	/// # Errors
	///
	/// Returns an error if the file cannot be read or its structure is
	/// invalid.
	pub fn open(path: impl AsRef<Path>) -> Result<Self, MmFileError> {
		let file = std::fs::File::open(path)?;
		let mut reader = Reader::new(std::io::BufReader::new(file));
		Self::from_reader(&mut reader)
	}

	/// Parses an ANI file from a borrowed byte source.
	///
	/// # Errors
	///
	/// Returns [`MmFileError::InvalidSignature`] when the 4-byte tag is not
	/// `"ANI\0"`, or [`MmFileError::TruncatedRead`] when the stream ends
	/// inside the marker table or a frame record.
	pub fn from_reader<R: Read + Seek>(reader: &mut Reader<R>) -> Result<Self, MmFileError> {
		reader.seek_to(0)?;
		Format::Ani.verify_signature(reader)?;

		let size = reader.u32()?;
		let frame_count = reader.u32()?;
		let version = reader.u32()?;
		let unknown1 = reader.u32()?;
		let anim_count = reader.u32()?;
		let sprite_name = reader.string(SPRITE_NAME_SIZE)?;

		debug!(
			"ANI header: size={size} frames={frame_count} version={version} \
			 groups={anim_count} sprite={sprite_name:?}"
		);

		let mut markers = Vec::with_capacity(anim_count as usize);
		for _ in 0..anim_count {
			markers.push(reader.u32()?);
		}

		let mut frames = Vec::with_capacity(frame_count as usize);
		for group in 0..anim_count {
			// The marker table holds cumulative frame counts, so the final
			// group has no successor marker; its length comes from the
			// header's total frame count instead.
			let group_frames = if group + 1 < anim_count {
				markers[group as usize + 1].saturating_sub(markers[group as usize])
			} else {
				frame_count.saturating_sub(markers[group as usize])
			};

			for index in 0..group_frames {
				frames.push(Frame::from_reader(
					reader,
					group + 1,
					index + 1,
					index + 1 == group_frames,
				)?);
			}
		}

		Ok(Self {
			size,
			frame_count,
			version,
			unknown1,
			anim_count,
			sprite_name,
			markers,
			frames,
		})
	}

	/// Returns the total file size recorded in the header.
	pub fn size(&self) -> u32 {
		self.size
	}

	/// Returns the total frame count recorded in the header.
	pub fn frame_count(&self) -> u32 {
		self.frame_count
	}

	/// Returns the format version.
	pub fn version(&self) -> u32 {
		self.version
	}

	/// Returns the unknown header field.
	pub fn unknown1(&self) -> u32 {
		self.unknown1
	}

	/// Returns the number of animation groups.
	pub fn anim_count(&self) -> u32 {
		self.anim_count
	}

	/// Returns the name of the sprite container this script animates.
	pub fn sprite_name(&self) -> &str {
		&self.sprite_name
	}

	/// Returns the cumulative frame-count marker table.
	pub fn markers(&self) -> &[u32] {
		&self.markers
	}

	/// Returns the decoded frame records in file order.
	pub fn frames(&self) -> &[Frame] {
		&self.frames
	}

	/// Returns an iterator over the frame records.
	pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
		self.frames.iter()
	}

	/// Returns the frames belonging to a 1-based animation group.
	pub fn group(&self, group: u32) -> impl Iterator<Item = &Frame> {
		self.frames.iter().filter(move |f| f.group == group)
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
			"ANI File: version {}, {} groups, {} frames, sprite \"{}\"",
			self.version,
			self.anim_count,
			self.frames.len(),
			self.sprite_name
		)
	}
}

#[cfg(test)]
mod tests {
	use std::io::Cursor;

	use super::*;

	fn push_u32(buf: &mut Vec<u8>, value: u32) {
		buf.extend_from_slice(&value.to_le_bytes());
	}

	fn push_frame(buf: &mut Vec<u8>, name: &[u8; 8]) {
		push_u32(buf, 0); // Sprite
		buf.extend_from_slice(&1i32.to_le_bytes());
		buf.extend_from_slice(&0i32.to_le_bytes());
		buf.extend_from_slice(&0i32.to_le_bytes());
		buf.extend_from_slice(name);
		buf.extend_from_slice(&[0; 4]);
		buf.extend_from_slice(&[0; 16]);
	}

	/// Two groups with markers [0, 2] and 3 total frames: group 1 holds two
	/// frames, the final group holds the remaining one.
	fn build_ani() -> Vec<u8> {
		let mut buf = Vec::new();
		buf.extend_from_slice(b"ANI\0");
		push_u32(&mut buf, 0); // declared size, patched below
		push_u32(&mut buf, 3); // total frames
		push_u32(&mut buf, 1); // version
		push_u32(&mut buf, 0); // unknown1
		push_u32(&mut buf, 2); // groups

		let mut sprite = [0u8; SPRITE_NAME_SIZE];
		sprite[..6].copy_from_slice(b"WIZARD");
		buf.extend_from_slice(&sprite);

		push_u32(&mut buf, 0);
		push_u32(&mut buf, 2);

		push_frame(&mut buf, b"WALK\0\0\0\0");
		push_frame(&mut buf, b"WALK2\0\0\0");
		push_frame(&mut buf, b"DIE\0\0\0\0\0");

		let size = buf.len() as u32;
		buf[4..8].copy_from_slice(&size.to_le_bytes());
		buf
	}

	#[test]
	fn test_groups_from_markers() {
		let mut reader = Reader::new(Cursor::new(build_ani()));
		let file = File::from_reader(&mut reader).unwrap();

		assert_eq!(file.anim_count(), 2);
		assert_eq!(file.sprite_name(), "WIZARD");
		assert_eq!(file.markers(), &[0, 2]);
		assert_eq!(file.frames().len(), 3);

		let first = &file.frames()[0];
		assert_eq!((first.group, first.index), (1, 1));
		assert_eq!(first.offset, 44 + 8);
		assert!(!first.last_in_group);

		let second = &file.frames()[1];
		assert_eq!((second.group, second.index), (1, 2));
		assert!(second.last_in_group);
	}

	#[test]
	fn test_final_group_from_total_frame_count() {
		let mut reader = Reader::new(Cursor::new(build_ani()));
		let file = File::from_reader(&mut reader).unwrap();

		let last: Vec<_> = file.group(2).collect();
		assert_eq!(last.len(), 1);
		assert_eq!(last[0].payload.label(), "DIE");
		assert!(last[0].last_in_group);
	}

	#[test]
	fn test_invalid_signature() {
		let mut data = build_ani();
		data[..4].copy_from_slice(b"XXX\0");
		let mut reader = Reader::new(Cursor::new(data));

		assert!(matches!(
			File::from_reader(&mut reader).unwrap_err(),
			MmFileError::InvalidSignature { .. }
		));
	}

	#[test]
	fn test_truncated_marker_table() {
		let mut data = build_ani();
		data.truncate(46);
		let mut reader = Reader::new(Cursor::new(data));

		assert!(matches!(
			File::from_reader(&mut reader).unwrap_err(),
			MmFileError::TruncatedRead { .. }
		));
	}
}
