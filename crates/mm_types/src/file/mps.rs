//! `.MPS` file format support for `mm-rs` project.
//!
//! MPS files are map placement tables: each record positions one element
//! (a wizard start, a creature, or an artifact) in the world.
//!
//! # File Structure
//!
//! - **Header (16 bytes):** 4-byte signature `"MPS\0"`, u32 unknown, u32
//!   version, u32 element count
//! - **Records:** `element_count` fixed 40-byte entries: u32 X, Y, Z, u32
//!   element kind, u32 index, five i32 unknowns
//!
//! Element kinds outside the documented range and catalog indices outside
//! the creature/object tables are kept as raw values rather than rejected;
//! see [`ElementKind`] and [`ElementRef`].

use std::fmt;
use std::io::{Read, Seek};
use std::path::Path;

use log::debug;
use serde::Serialize;

use crate::file::catalog::{CREATURES, OBJECTS};
use crate::file::{Format, MmFileError, Reader};

/// Kind of a placed map element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ElementKind {
	/// No element
	Undefined,
	/// Player-controlled wizard start position
	FriendlyWizard,
	/// AI wizard start position
	EnemyWizard,
	/// Multiplayer wizard start position
	MultiplayerWizard,
	/// Creature, indexed into the creature catalog
	Creature,
	/// Artifact, indexed into the object catalog
	Artifact,
	/// Code outside the documented range, kept verbatim
	Invalid(u32),
}

impl ElementKind {
	/// Maps a raw element-kind code to its enum value.
	///
	/// Out-of-range codes are preserved as [`ElementKind::Invalid`].
	pub fn from_code(code: u32) -> Self {
		match code {
			0 => Self::Undefined,
			1 => Self::FriendlyWizard,
			2 => Self::EnemyWizard,
			3 => Self::MultiplayerWizard,
			4 => Self::Creature,
			5 => Self::Artifact,
			other => Self::Invalid(other),
		}
	}
}

impl fmt::Display for ElementKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Undefined => write!(f, "Undefined"),
			Self::FriendlyWizard => write!(f, "Friendly Wizard"),
			Self::EnemyWizard => write!(f, "Enemy Wizard"),
			Self::MultiplayerWizard => write!(f, "Multiplayer Wizard"),
			Self::Creature => write!(f, "Creature"),
			Self::Artifact => write!(f, "Artifact"),
			Self::Invalid(code) => write!(f, "{code} (Invalid)"),
		}
	}
}

/// Resolved element reference: a catalog name when the kind and index allow
/// it, otherwise the raw index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ElementRef {
	/// Catalog name for creatures and artifacts with an in-range index
	Named(&'static str),
	/// Raw index, passed through unresolved
	Index(u32),
}

impl ElementRef {
	/// Resolves an element index against the catalogs.
	///
	/// Only `Creature` and `Artifact` kinds resolve, and only when the index
	/// is within the respective catalog's bounds.
	pub fn resolve(kind: ElementKind, index: u32) -> Self {
		let catalog: &[&'static str] = match kind {
			ElementKind::Creature => &CREATURES,
			ElementKind::Artifact => &OBJECTS,
			_ => return Self::Index(index),
		};

		match catalog.get(index as usize) {
			Some(name) => Self::Named(name),
			None => Self::Index(index),
		}
	}
}

impl fmt::Display for ElementRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Named(name) => write!(f, "{name}"),
			Self::Index(index) => write!(f, "{index}"),
		}
	}
}

/// A single map placement record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
	/// Absolute byte offset where this record starts
	pub offset: u64,
	/// 1-based record index
	pub index: u32,
	/// X coordinate
	pub x: u32,
	/// Y coordinate
	pub y: u32,
	/// Z coordinate
	pub z: u32,
	/// Element kind
	pub kind: ElementKind,
	/// Catalog name or raw index, depending on kind
	pub target: ElementRef,
	/// Five unknown trailing values
	pub unknown: [i32; 5],
}

impl Element {
	fn from_reader<R: Read + Seek>(
		reader: &mut Reader<R>,
		index: u32,
	) -> Result<Self, MmFileError> {
		let offset = reader.position()?;

		let x = reader.u32()?;
		let y = reader.u32()?;
		let z = reader.u32()?;
		let kind = ElementKind::from_code(reader.u32()?);
		let target = ElementRef::resolve(kind, reader.u32()?);

		let mut unknown = [0i32; 5];
		for slot in &mut unknown {
			*slot = reader.i32()?;
		}

		Ok(Self {
			offset,
			index,
			x,
			y,
			z,
			kind,
			target,
			unknown,
		})
	}
}

impl fmt::Display for Element {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"#{} {} \"{}\" at ({},{},{})",
			self.index, self.kind, self.target, self.x, self.y, self.z
		)
	}
}

/// MPS file structure, representing a complete placement table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
	unknown1: u32,
	version: u32,
	elements: Vec<Element>,
}

impl File {
	/// Opens an MPS file from the specified path.
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

	/// Parses an MPS file from a borrowed byte source.
	///
	/// # Errors
	///
	/// Returns [`MmFileError::InvalidSignature`] when the 4-byte tag is not
	/// `"MPS\0"`, or [`MmFileError::TruncatedRead`] when the stream ends
	/// before the declared record count.
	pub fn from_reader<R: Read + Seek>(reader: &mut Reader<R>) -> Result<Self, MmFileError> {
		reader.seek_to(0)?;
		Format::Mps.verify_signature(reader)?;

		let unknown1 = reader.u32()?;
		let version = reader.u32()?;
		let element_count = reader.u32()?;

		debug!("MPS header: unknown1={unknown1} version={version} elements={element_count}");

		let mut elements = Vec::with_capacity(element_count as usize);
		for i in 0..element_count {
			elements.push(Element::from_reader(reader, i + 1)?);
		}

		Ok(Self {
			unknown1,
			version,
			elements,
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

	/// Returns the decoded placement records in file order.
	pub fn elements(&self) -> &[Element] {
		&self.elements
	}

	/// Returns an iterator over the placement records.
	pub fn iter(&self) -> std::slice::Iter<'_, Element> {
		self.elements.iter()
	}
}

impl<'a> IntoIterator for &'a File {
	type Item = &'a Element;
	type IntoIter = std::slice::Iter<'a, Element>;

	fn into_iter(self) -> Self::IntoIter {
		self.elements.iter()
	}
}

impl fmt::Display for File {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "MPS File: version {}, {} elements", self.version, self.elements.len())
	}
}

#[cfg(test)]
mod tests {
	use std::io::Cursor;

	use super::*;

	fn push_u32(buf: &mut Vec<u8>, value: u32) {
		buf.extend_from_slice(&value.to_le_bytes());
	}

	fn build_mps(records: &[[u32; 5]]) -> Vec<u8> {
		let mut buf = Vec::new();
		buf.extend_from_slice(b"MPS\0");
		push_u32(&mut buf, 0);
		push_u32(&mut buf, 3);
		push_u32(&mut buf, records.len() as u32);

		for (i, &[x, y, z, kind, index]) in records.iter().enumerate() {
			for v in [x, y, z, kind, index] {
				push_u32(&mut buf, v);
			}
			for u in 0..5 {
				buf.extend_from_slice(&(-(i as i32) - u).to_le_bytes());
			}
		}

		buf
	}

	#[test]
	fn test_roundtrip_literal_values() {
		let data = build_mps(&[[100, 200, 1, 1, 0]]);
		let mut reader = Reader::new(Cursor::new(data));
		let file = File::from_reader(&mut reader).unwrap();

		assert_eq!(file.version(), 3);
		let el = &file.elements()[0];
		assert_eq!(el.offset, 16);
		assert_eq!(el.index, 1);
		assert_eq!((el.x, el.y, el.z), (100, 200, 1));
		assert_eq!(el.kind, ElementKind::FriendlyWizard);
		assert_eq!(el.unknown, [0, -1, -2, -3, -4]);
	}

	#[test]
	fn test_artifact_resolves_to_object_name() {
		let data = build_mps(&[[0, 0, 0, 5, 0]]);
		let mut reader = Reader::new(Cursor::new(data));
		let file = File::from_reader(&mut reader).unwrap();

		let el = &file.elements()[0];
		assert_eq!(el.kind, ElementKind::Artifact);
		assert_eq!(el.target, ElementRef::Named("MEAT"));
	}

	#[test]
	fn test_creature_resolves_to_creature_name() {
		let data = build_mps(&[[0, 0, 0, 4, 0]]);
		let mut reader = Reader::new(Cursor::new(data));
		let file = File::from_reader(&mut reader).unwrap();

		assert_eq!(file.elements()[0].target, ElementRef::Named("PLAYER_WIZARD"));
	}

	#[test]
	fn test_wizard_index_passes_through() {
		let data = build_mps(&[[0, 0, 0, 2, 3]]);
		let mut reader = Reader::new(Cursor::new(data));
		let file = File::from_reader(&mut reader).unwrap();

		let el = &file.elements()[0];
		assert_eq!(el.kind, ElementKind::EnemyWizard);
		assert_eq!(el.target, ElementRef::Index(3));
	}

	#[test]
	fn test_out_of_range_kind_and_index() {
		let data = build_mps(&[[0, 0, 0, 9, 2], [0, 0, 0, 4, 5000]]);
		let mut reader = Reader::new(Cursor::new(data));
		let file = File::from_reader(&mut reader).unwrap();

		let invalid = &file.elements()[0];
		assert_eq!(invalid.kind, ElementKind::Invalid(9));
		assert_eq!(invalid.kind.to_string(), "9 (Invalid)");
		assert_eq!(invalid.target, ElementRef::Index(2));

		// Creature index past the catalog stays raw
		assert_eq!(file.elements()[1].target, ElementRef::Index(5000));
	}

	#[test]
	fn test_invalid_signature() {
		let mut data = build_mps(&[]);
		data[..4].copy_from_slice(b"EVT\0");
		let mut reader = Reader::new(Cursor::new(data));

		assert!(matches!(
			File::from_reader(&mut reader).unwrap_err(),
			MmFileError::InvalidSignature { .. }
		));
	}
}
