//! Prelude module for `mm_types`.
//!
//! This module provides a convenient way to import commonly used types.
//!
//! # Examples
//!
//! ```no_run
//! use mm_types::prelude::*;
//!
//! # fn main() -> Result<(), MmFileError> {
//! let script = AniFile::open("WIZARD.ANI")?;
//! let (sprites, mut reader) = SprFile::open("WIZARD.SPR")?;
//! let raster = sprites.frame_pixels(0, &mut reader)?;
//! # Ok(())
//! # }
//! ```

// File module types
#[doc(inline)]
pub use crate::file::{
	// ANI types
	AniFile,
	AniFrame,
	AniFrameType,

	// Pixel model
	Color,

	// MPS types
	Element,
	ElementKind,
	ElementRef,

	// EVT types
	Event,
	EvtFile,

	// Registry
	Format,

	// Error type
	MmFileError,
	MpsFile,

	Palette,
	Parsed,

	// Byte reader
	Reader,

	// SPR/SFT types
	SprFile,
	SprFrame,
	SprLayout,
};

// Re-export the file module for advanced usage
#[doc(inline)]
pub use crate::file;
