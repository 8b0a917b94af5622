//! Key bodies and the fixed key layout.
//!
//! A [`Key`] is a positioned rectangular body: one transform chain for its
//! pose, four per-edge width extensions that enlarge its nominal footprint,
//! and solid generation for the switch housing and keycap. Corner queries
//! return fresh [`Chain`]s (never the key's own), so callers can keep
//! composing offsets without disturbing the key.
//!
//! [`KeyLayout`] wires the six keys of the macropad into one tree rooted at
//! a caller-supplied origin chain, applies the switch-height correction to
//! every key exactly once, and validates that no key ends up with a missing
//! or doubled correction.
//!
//! # Example
//!
//! ```
//! use case_layout::KeyLayout;
//! use case_transform::Chain;
//!
//! let origin = Chain::new().with_translation(-20.0, -40.0, 3.0);
//! let layout = KeyLayout::new(&origin).unwrap();
//! assert_eq!(layout.all_keys().len(), 6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod key;
mod layout;

pub use error::{LayoutError, LayoutResult};
pub use key::{HeightCorrection, Key, KEY_FOOTPRINT, SWITCH_TOP_DROP};
pub use layout::{KeyLayout, KEY_SPACING};
