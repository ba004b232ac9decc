//! `.EVT` file format support for `mm-rs` project.
//!
//! EVT files are event tables: each record maps an axis-aligned world-space
//! box to a named script event.
//!
//! # File Structure
//!
//! - **Header (16 bytes):** 4-byte signature `"EVT\0"`, u32 unknown, u32
//!   version, u32 event count
//! - **Records:** `event_count` fixed 72-byte entries, each holding six u32
//!   coordinates (X1, Y1, Z1, X2, Y2, Z2) followed by a 48-byte NUL-padded
//!   event name

use std::fmt;
use std::io::{Read, Seek};
use std::path::Path;

use log::debug;
use serde::Serialize;

use crate::file::{Format, MmFileError, Reader};

/// Size of the NUL-padded event name field in bytes
const EVENT_NAME_SIZE: usize = 48;

/// A single event record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
	/// Absolute byte offset where this record starts
	pub offset: u64,
	/// 1-based record index
	pub index: u32,
	/// Box corner 1, X coordinate
	pub x1: u32,
	/// Box corner 1, Y coordinate
	pub y1: u32,
	/// Box corner 1, Z coordinate
	pub z1: u32,
	/// Box corner 2, X coordinate
	pub x2: u32,
	/// Box corner 2, Y coordinate
	pub y2: u32,
	/// Box corner 2, Z coordinate
	pub z2: u32,
	/// Event name, trailing NULs trimmed
	pub name: String,
}

impl Event {
	fn from_reader<R: Read + Seek>(
		reader: &mut Reader<R>,
		index: u32,
	) -> Result<Self, MmFileError> {
		let offset = reader.position()?;

		Ok(Self {
			offset,
			index,
			x1: reader.u32()?,
			y1: reader.u32()?,
			z1: reader.u32()?,
			x2: reader.u32()?,
			y2: reader.u32()?,
			z2: reader.u32()?,
			name: reader.string(EVENT_NAME_SIZE)?,
		})
	}
}

impl fmt::Display for Event {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"#{} \"{}\" ({},{},{})-({},{},{})",
			self.index, self.name, self.x1, self.y1, self.z1, self.x2, self.y2, self.z2
		)
	}
}

/// EVT file structure, representing a complete event table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
	unknown1: u32,
	version: u32,
	events: Vec<Event>,
}

impl File {
	/// Opens an EVT file from the specified path.
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

	/// Parses an EVT file from a borrowed byte source.
	///
	/// The reader is repositioned freely; callers must not assume its
	/// position is preserved.
	///
	/// # Errors
	///
	/// Returns [`MmFileError::InvalidSignature`] when the 4-byte tag is not
	/// `"EVT\0"`, or [`MmFileError::TruncatedRead`] when the stream ends
	/// before the declared record count.
	pub fn from_reader<R: Read + Seek>(reader: &mut Reader<R>) -> Result<Self, MmFileError> {
		reader.seek_to(0)?;
		Format::Evt.verify_signature(reader)?;

		let unknown1 = reader.u32()?;
		let version = reader.u32()?;
		let event_count = reader.u32()?;

		debug!("EVT header: unknown1={unknown1} version={version} events={event_count}");

		let mut events = Vec::with_capacity(event_count as usize);
		for i in 0..event_count {
			events.push(Event::from_reader(reader, i + 1)?);
		}

		Ok(Self {
			unknown1,
			version,
			events,
		})
	}

	/// Returns the unknown header field.
	pub fn unknown1(&self) -> u32 {
		self.unknown1
	}

	/// Returns the format version.
	pub fn version(&self) -> u32 {
		self.version
	}

	/// Returns the decoded event records in file order.
	pub fn events(&self) -> &[Event] {
		&self.events
	}

	/// Returns an iterator over the event records.
	pub fn iter(&self) -> std::slice::Iter<'_, Event> {
		self.events.iter()
	}
}

impl<'a> IntoIterator for &'a File {
	type Item = &'a Event;
	type IntoIter = std::slice::Iter<'a, Event>;

	fn into_iter(self) -> Self::IntoIter {
		self.events.iter()
	}
}

impl fmt::Display for File {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "EVT File: version {}, {} events", self.version, self.events.len())
	}
}

#[cfg(test)]
mod tests {
	use std::io::Cursor;

	use super::*;

	fn push_u32(buf: &mut Vec<u8>, value: u32) {
		buf.extend_from_slice(&value.to_le_bytes());
	}

	fn build_evt(records: &[(u32, u32, u32, u32, u32, u32, &str)]) -> Vec<u8> {
		let mut buf = Vec::new();
		buf.extend_from_slice(b"EVT\0");
		push_u32(&mut buf, 7);
		push_u32(&mut buf, 1);
		push_u32(&mut buf, records.len() as u32);

		for &(x1, y1, z1, x2, y2, z2, name) in records {
			for v in [x1, y1, z1, x2, y2, z2] {
				push_u32(&mut buf, v);
			}
			let mut padded = [0u8; EVENT_NAME_SIZE];
			padded[..name.len()].copy_from_slice(name.as_bytes());
			buf.extend_from_slice(&padded);
		}

		buf
	}

	#[test]
	fn test_roundtrip_literal_values() {
		let data = build_evt(&[
			(1, 2, 3, 4, 5, 6, "SPAWN_WEST"),
			(10, 20, 30, 40, 50, 60, "EXIT_EAST"),
		]);
		let mut reader = Reader::new(Cursor::new(data));
		let file = File::from_reader(&mut reader).unwrap();

		assert_eq!(file.unknown1(), 7);
		assert_eq!(file.version(), 1);
		assert_eq!(file.events().len(), 2);

		let first = &file.events()[0];
		assert_eq!(first.offset, 16);
		assert_eq!(first.index, 1);
		assert_eq!((first.x1, first.y1, first.z1), (1, 2, 3));
		assert_eq!((first.x2, first.y2, first.z2), (4, 5, 6));
		assert_eq!(first.name, "SPAWN_WEST");

		let second = &file.events()[1];
		assert_eq!(second.offset, 16 + 72);
		assert_eq!(second.index, 2);
		assert_eq!(second.name, "EXIT_EAST");
	}

	#[test]
	fn test_invalid_signature() {
		let mut data = build_evt(&[]);
		data[..4].copy_from_slice(b"MPS\0");
		let mut reader = Reader::new(Cursor::new(data));

		let err = File::from_reader(&mut reader).unwrap_err();
		assert!(matches!(err, MmFileError::InvalidSignature { .. }));
	}

	#[test]
	fn test_truncated_record() {
		let mut data = build_evt(&[(1, 2, 3, 4, 5, 6, "SPAWN_WEST")]);
		data.truncate(data.len() - 10);
		let mut reader = Reader::new(Cursor::new(data));

		let err = File::from_reader(&mut reader).unwrap_err();
		assert!(matches!(err, MmFileError::TruncatedRead { .. }));
	}
}
