//! This crate provides data types and file format support for the `mm-rs` project.
//!
//! # File Formats
//!
//! - **ANI**: Animation scripts grouping per-frame records into animation groups
//! - **EVT**: Event tables mapping world-space boxes to named script events
//! - **MPS**: Map placement tables positioning wizards, creatures and artifacts
//! - **SPR**: Sprite containers with palettes and run-length encoded frames
//! - **SFT**: Font containers sharing the SPR palette/frame layout
//!
//! All parsers are decode-only and operate on any `Read + Seek` byte source
//! through a borrowed [`file::Reader`] handle.
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use mm_types::prelude::*;
//!
//! # fn main() -> Result<(), MmFileError> {
//! let map = MpsFile::open("MAP01.MPS")?;
//! for element in map.elements() {
//!     println!("{element}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Or use explicit paths:
//!
//! ```no_run
//! use mm_types::file::evt;
//!
//! # fn main() -> Result<(), mm_types::file::MmFileError> {
//! let events = evt::File::open("MAP01.EVT")?;
//! println!("{} events", events.events().len());
//! # Ok(())
//! # }
//! ```

pub mod file;

/// `use mm_types::prelude::*;` to import commonly used items.
pub mod prelude;
