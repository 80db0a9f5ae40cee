//! Face animation clips (`VideoInfo`) for the `emoface` project.
//!
//! A clip is an ordered list of JPEG frames. The firmware keeps each clip as three
//! tables: the frame pointers, a `uint16_t` size per frame, and the frame count.
//! [`Clip`] holds the frames and derives the other two, enforcing the 16-bit limits.
//!
//! # Packed Container
//!
//! Clips are stored on disk as `.fclp` files:
//!
//! ```text
//! Offset  Size      Field         Description
//! ------  --------  ------------  -----------------------------------
//! 0x00    4         magic         "FCLP"
//! 0x04    2         version       Container version (1)
//! 0x06    2         frame_count   Number of frames N
//! 0x08    2         width         Frame width, 0 when unknown
//! 0x0A    2         height        Frame height, 0 when unknown
//! 0x0C    4         reserved      Zero
//! 0x10    2*N       sizes         Size of each frame (u16, little-endian)
//! ...     sum       frames        Frame data in playback order
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use emoface_types::clip::Clip;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let clip = Clip::open("assets/vuive.fclp")?;
//! println!("{} has {} frames", clip.name(), clip.num_frames());
//!
//! for (i, frame) in clip.frames().enumerate() {
//!     println!("  frame {}: {} bytes", i, frame.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod constants;
mod file;
mod iterator;

pub use self::file::Clip;
pub use self::iterator::FrameIter;
