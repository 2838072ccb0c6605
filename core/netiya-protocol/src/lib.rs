#![no_std] // Engine and tools share these types; keep them alloc-only

extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(feature = "std")]
extern crate std;

pub mod suffix;
pub use suffix::{PluralSuffix, SingularSuffix, UnknownSuffixCode};

pub mod model;
pub use model::*;
