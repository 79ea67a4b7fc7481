//! Embedded game assets
//!
//! Default word list and picture compiled into the binary at build time.

// Include generated assets from build script
include!(concat!(env!("OUT_DIR"), "/words.rs"));
include!(concat!(env!("OUT_DIR"), "/picture.rs"));
