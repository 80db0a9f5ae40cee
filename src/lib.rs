#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `emoface` manages the animated faces of a small talking robot: emotions, the
//! JPEG clips that show them, and the catalog the firmware draws from.
//!
//! Enable one of the `rev1`, `rev2` or `rev3` features to pick the catalog
//! revision compiled in; `rev3` is the default.
//!
pub use emoface_internal::*;
