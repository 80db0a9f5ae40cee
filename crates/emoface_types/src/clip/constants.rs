//! Clip container constants.

/// Magic bytes at the start of a packed clip
pub const MAGIC: [u8; 4] = *b"FCLP";

/// Container version written by this crate
pub const VERSION: u16 = 1;

/// Size of the fixed header (16 bytes)
pub const HEADER_SIZE: usize = 16;

/// Size of one frame size entry (2 bytes)
pub const FRAME_SIZE_ENTRY: usize = 2;

/// Largest frame the firmware's `uint16_t` size table can describe
pub const MAX_FRAME_BYTES: usize = u16::MAX as usize;

/// Largest frame count the firmware's `uint16_t` counter can describe
pub const MAX_FRAMES: usize = u16::MAX as usize;

/// JPEG start-of-image marker every frame begins with
pub const JPEG_SOI: [u8; 2] = [0xFF, 0xD8];

/// File extension of packed clips
pub const EXTENSION: &str = "fclp";
