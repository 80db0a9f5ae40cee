//! Prelude module for `emoface_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use emoface_internal::prelude::*;
//!
//! let manifest = Manifest::active().unwrap();
//! let names = manifest.asset_names();
//! assert!(names.contains(&"binhthuong"));
//!
//! let state = FaceState::new(DeviceState::Waiting, Emotion::Neutral);
//! assert_eq!(FaceMode::for_state(state.state, state.emotion), FaceMode::Thinking);
//! ```

// Re-export everything from emoface_types::prelude
#[doc(inline)]
pub use emoface_types::prelude::*;

// Re-export the entire emoface_types module for advanced usage
#[doc(inline)]
pub use emoface_types;
