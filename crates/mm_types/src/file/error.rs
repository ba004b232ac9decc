//! Error types for file format parsing.

use thiserror::Error;

/// Errors that can occur when decoding Magic & Mayhem data files.
///
/// All variants are fatal for the file being decoded (or, for
/// [`MmFileError::InvalidDimensions`], for the frame being decoded). Batch
/// callers are expected to report the failure and continue with the next file.
#[derive(Debug, Error)]
pub enum MmFileError {
	/// The 4-byte signature did not match the expected format tag
	#[error("Invalid signature: expected {expected:02X?}, got {actual:02X?}")]
	InvalidSignature {
		/// Signature required by the format
		expected: [u8; 4],
		/// Signature found in the stream
		actual: [u8; 4],
	},

	/// The size declared in the header does not match the stream length
	#[error("Invalid file size: header declares {declared} bytes, stream has {actual}")]
	InvalidFileSize {
		/// Total size recorded in the file header
		declared: u32,
		/// Actual length of the byte source
		actual: u64,
	},

	/// A sprite frame with zero width or height cannot be rasterized
	#[error("Invalid frame dimensions: {width}x{height}")]
	InvalidDimensions {
		/// Frame width in pixels
		width: u32,
		/// Frame height in pixels
		height: u32,
	},

	/// The stream ended before the requested number of bytes was available
	#[error("Truncated read at offset {position}: requested {requested} bytes")]
	TruncatedRead {
		/// Stream position where the read started
		position: u64,
		/// Number of bytes requested
		requested: usize,
	},

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}
