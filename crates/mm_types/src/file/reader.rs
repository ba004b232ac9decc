//! Positioned little-endian reader over a seekable byte source.
//!
//! Every parser in this crate consumes bytes through [`Reader`], a thin
//! stateful cursor around any `Read + Seek` source. The handle is borrowed
//! per parse call and repositioned freely; callers must not assume the
//! stream position is preserved across calls. Because the position is shared
//! mutable state, a handle must never be used from more than one decode at a
//! time — give each file its own reader.

use std::io::{ErrorKind, Read, Seek, SeekFrom};

use crate::file::MmFileError;

/// Sequential little-endian primitive reader with random access.
#[derive(Debug)]
pub struct Reader<R> {
	inner: R,
}

impl<R: Read + Seek> Reader<R> {
	/// Wraps a byte source.
	pub fn new(inner: R) -> Self {
		Self {
			inner,
		}
	}

	/// Consumes the reader, returning the underlying byte source.
	pub fn into_inner(self) -> R {
		self.inner
	}

	/// Returns the current stream position.
	pub fn position(&mut self) -> Result<u64, MmFileError> {
		Ok(self.inner.stream_position()?)
	}

	/// Seeks to an absolute offset, returning the new position.
	pub fn seek_to(&mut self, offset: u64) -> Result<u64, MmFileError> {
		Ok(self.inner.seek(SeekFrom::Start(offset))?)
	}

	/// Seeks by a signed delta from the current position.
	pub fn seek_by(&mut self, delta: i64) -> Result<u64, MmFileError> {
		Ok(self.inner.seek(SeekFrom::Current(delta))?)
	}

	/// Seeks to the end of the stream, returning its total length.
	pub fn stream_len(&mut self) -> Result<u64, MmFileError> {
		Ok(self.inner.seek(SeekFrom::End(0))?)
	}

	/// Reads exactly `count` bytes, advancing the position.
	///
	/// # Errors
	///
	/// Returns [`MmFileError::TruncatedRead`] when fewer than `count` bytes
	/// remain in the stream.
	pub fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>, MmFileError> {
		let position = self.position()?;
		let mut buf = vec![0u8; count];
		self.inner.read_exact(&mut buf).map_err(|e| {
			if e.kind() == ErrorKind::UnexpectedEof {
				MmFileError::TruncatedRead {
					position,
					requested: count,
				}
			} else {
				MmFileError::IOError(e)
			}
		})?;
		Ok(buf)
	}

	/// Reads exactly `N` bytes into a fixed-size array.
	pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], MmFileError> {
		let position = self.position()?;
		let mut buf = [0u8; N];
		self.inner.read_exact(&mut buf).map_err(|e| {
			if e.kind() == ErrorKind::UnexpectedEof {
				MmFileError::TruncatedRead {
					position,
					requested: N,
				}
			} else {
				MmFileError::IOError(e)
			}
		})?;
		Ok(buf)
	}

	/// Reads an unsigned 8-bit integer.
	pub fn u8(&mut self) -> Result<u8, MmFileError> {
		Ok(self.read_array::<1>()?[0])
	}

	/// Reads a signed 8-bit integer.
	pub fn i8(&mut self) -> Result<i8, MmFileError> {
		Ok(self.read_array::<1>()?[0] as i8)
	}

	/// Reads an unsigned 32-bit little-endian integer.
	pub fn u32(&mut self) -> Result<u32, MmFileError> {
		Ok(u32::from_le_bytes(self.read_array::<4>()?))
	}

	/// Reads a signed 32-bit little-endian integer.
	pub fn i32(&mut self) -> Result<i32, MmFileError> {
		Ok(i32::from_le_bytes(self.read_array::<4>()?))
	}

	/// Reads a fixed-length NUL-padded string, trimming trailing NULs only.
	pub fn string(&mut self, count: usize) -> Result<String, MmFileError> {
		let raw = self.read_bytes(count)?;
		let trimmed = match raw.iter().rposition(|&b| b != 0) {
			Some(last) => &raw[..=last],
			None => &[],
		};
		Ok(String::from_utf8_lossy(trimmed).into_owned())
	}
}
