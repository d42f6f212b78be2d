//! EBML element tree parsing and serialization, and the WebM duration fix
//! built on top of it.
//!
//! ```
//! use ebml::{fix_bytes, FixOptions};
//!
//! let broken: &[u8] = &[0x1a, 0x45, 0xdf, 0xa3, 0x80];
//! // Nothing to fix without a Segment: the input comes back untouched
//! let fixed = fix_bytes(broken, 5000.0, FixOptions::silent());
//! assert_eq!(&*fixed, broken);
//! ```

use std::borrow::Cow;

pub mod duration;
pub mod element;
pub mod error;
pub mod logger;
pub mod options;
pub mod parser;
pub mod registry;
pub mod summary;
pub mod vint;
pub mod writer;

pub use duration::{fix_duration, patch, read_duration_ms, PatchOutcome};
pub use element::{Element, ElementKind, ElementValue, Float, UnsignedInt};
pub use error::{Error, Result};
pub use logger::Logger;
pub use options::FixOptions;
pub use parser::parse;
pub use summary::{summarize, ElementSummary, SummaryValue};
pub use writer::serialize;

use logger::diag;

/// Rewrite `bytes` with a Segment duration of `duration_ms` milliseconds.
///
/// Best effort: if the input cannot be parsed, already has a positive
/// duration, or lacks the sections the fix needs, the input is returned
/// borrowed and unchanged. So is a NaN or infinite `duration_ms`; any finite
/// value, negative included, is written as given.
pub fn fix_bytes<'b>(bytes: &'b [u8], duration_ms: f64, options: FixOptions<'_>) -> Cow<'b, [u8]> {
    let mut logger = options.logger;

    if !duration_ms.is_finite() {
        diag!(logger, "Invalid duration {} ms, leaving the file as is", duration_ms);
        return Cow::Borrowed(bytes);
    }

    let mut root = match parse(bytes) {
        Ok(root) => root,
        Err(e) => {
            log::debug!("Failed to parse input: {}", e);
            return Cow::Borrowed(bytes);
        }
    };

    if !fix_duration(&mut root, duration_ms, &mut logger) {
        return Cow::Borrowed(bytes);
    }

    match serialize(&root) {
        Ok(fixed) => Cow::Owned(fixed),
        Err(e) => {
            log::warn!("Failed to serialize fixed file: {}", e);
            Cow::Borrowed(bytes)
        }
    }
}

/// Segment duration of `bytes` in milliseconds, if it declares one.
pub fn probe_duration_ms(bytes: &[u8]) -> Option<f64> {
    read_duration_ms(&parse(bytes).ok()?)
}

/// JSON outline of the element tree in `bytes`.
pub fn describe(bytes: &[u8]) -> Result<String> {
    summary::to_json(&parse(bytes)?)
}
