//! End-to-end decode tests over synthetic Magic & Mayhem files.

use std::io::Cursor;

use anyhow::Result;
use mm_rs::prelude::*;

fn push_u32(buf: &mut Vec<u8>, value: u32) {
	buf.extend_from_slice(&value.to_le_bytes());
}

/// A small SPR container: one greyscale-fallback palette slot (palette
/// count 0), one 3×1 frame with the row pattern transparent/color/color.
fn build_spr() -> Vec<u8> {
	let mut buf = Vec::new();
	buf.extend_from_slice(b"SPR\0");
	push_u32(&mut buf, 0); // size, patched below
	push_u32(&mut buf, 3); // version
	push_u32(&mut buf, 1); // frame count
	push_u32(&mut buf, 0); // palette count
	push_u32(&mut buf, 0); // header pad, up to the 24-byte header size
	push_u32(&mut buf, 0); // per-frame index table

	// Frame: 40-byte descriptor (version > 2), one row table entry
	let delta_at: u32 = 40 + 8;
	let pixel_at: u32 = delta_at + 2;
	push_u32(&mut buf, pixel_at + 2); // frame size
	push_u32(&mut buf, 3); // width
	push_u32(&mut buf, 1); // height
	push_u32(&mut buf, 0);
	push_u32(&mut buf, 0);
	buf.extend_from_slice(b"STAND\0\0\0");
	push_u32(&mut buf, 0); // palette index
	buf.extend_from_slice(&[0u8; 8]); // reserved (version > 2)
	push_u32(&mut buf, delta_at);
	push_u32(&mut buf, pixel_at);
	buf.extend_from_slice(&[1, 2]); // runs: 1 transparent, 2 colors
	buf.extend_from_slice(&[7, 9]); // palette indices

	let size = buf.len() as u32;
	buf[4..8].copy_from_slice(&size.to_le_bytes());
	buf
}

#[test_log::test]
fn sniff_and_dispatch_batch() -> Result<()> {
	let mut mps = b"MPS\0".to_vec();
	mps.extend_from_slice(&[0u8; 12]);

	let mut evt = b"EVT\0".to_vec();
	evt.extend_from_slice(&[0u8; 12]);

	let mut decoded = Vec::new();
	for source in [mps, evt, b"JUNKJUNK".to_vec()] {
		let mut reader = Reader::new(Cursor::new(source));
		match Format::sniff(&mut reader)? {
			Some(format) => decoded.push(format.parse(&mut reader)?.format()),
			None => continue, // unknown file, batch moves on
		}
	}

	assert_eq!(decoded, vec![Format::Mps, Format::Evt]);
	Ok(())
}

#[test_log::test]
fn spr_decodes_lazily_from_open_source() -> Result<()> {
	let mut reader = Reader::new(Cursor::new(build_spr()));
	let file = SprFile::sprite_from_reader(&mut reader)?;

	assert_eq!(file.version(), 3);
	assert_eq!(file.frames().len(), 1);
	assert_eq!(file.data_offset(), file.frames()[0].offset);

	// Greyscale fallback palette
	assert_eq!(file.palettes().len(), 1);
	assert_eq!(file.palettes()[0].get(7), Color::new(7, 7, 7, 255));

	// Raster decode against the still-open source
	let raster = file.frame_pixels(0, &mut reader)?;
	assert_eq!(raster, vec![0, 0, 0, 0, 7, 7, 7, 255, 9, 9, 9, 255]);

	// Decoding twice yields the identical raster
	assert_eq!(raster, file.frame_pixels(0, &mut reader)?);
	Ok(())
}

#[test]
fn records_serialize_for_tabular_export() -> Result<()> {
	let mut buf = b"MPS\0".to_vec();
	push_u32(&mut buf, 0);
	push_u32(&mut buf, 1);
	push_u32(&mut buf, 1);
	for v in [5u32, 6, 0, 5, 0] {
		push_u32(&mut buf, v);
	}
	buf.extend_from_slice(&[0u8; 20]);

	let mut reader = Reader::new(Cursor::new(buf));
	let file = MpsFile::from_reader(&mut reader)?;
	let element = &file.elements()[0];
	assert_eq!(element.target, ElementRef::Named("MEAT"));

	let json = serde_json::to_value(element)?;
	assert_eq!(json["x"], 5);
	assert_eq!(json["target"]["Named"], "MEAT");
	Ok(())
}

#[test]
fn corrupt_file_fails_without_poisoning_batch() {
	let mut truncated = build_spr();
	truncated.truncate(20);
	let mut reader = Reader::new(Cursor::new(truncated));

	// Declared size no longer matches the stream
	assert!(matches!(
		SprFile::sprite_from_reader(&mut reader),
		Err(MmFileError::InvalidFileSize { .. })
	));

	// The next file in the batch still decodes
	let mut reader = Reader::new(Cursor::new(build_spr()));
	assert!(SprFile::sprite_from_reader(&mut reader).is_ok());
}
