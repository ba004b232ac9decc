//! `mm-rs` decodes the proprietary data files of the game Magic & Mayhem:
//! animation scripts (`.ani`), event tables (`.evt`), map placement tables
//! (`.mps`) and sprite/font containers (`.spr`/`.sft`).
//!
//! All decoding lives in [`mm_types`]; this crate is the public facade.

pub use mm_types::*;
