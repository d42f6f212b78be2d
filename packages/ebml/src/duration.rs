//! Segment duration repair.
//!
//! MediaRecorder starts writing before it knows how long the recording will
//! be, so `Segment/Info/Duration` ends up missing or zero. Players then treat
//! the file as a live stream and cannot seek.

use std::fmt;

use crate::element::{find, find_mut, Element, ElementValue, Float, UnsignedInt};
use crate::logger::{diag, Logger};
use crate::registry::{DURATION, INFO, SEGMENT, TIMECODE_SCALE};

/// Nanoseconds per tick when Duration is written in milliseconds.
pub const MILLISECOND_TIMECODE_SCALE: u64 = 1_000_000;

/// Result of [`patch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    MissingSegment,
    MissingInfo,
    MissingTimecodeScale,

    /// Duration already holds a positive value
    AlreadyPresent,

    /// A zero, negative, NaN or unreadable Duration was overwritten
    Replaced,

    /// Duration was appended to Info
    Inserted,
}

impl PatchOutcome {
    pub fn is_modified(&self) -> bool {
        matches!(self, PatchOutcome::Replaced | PatchOutcome::Inserted)
    }
}

impl fmt::Display for PatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchOutcome::MissingSegment => write!(f, "missing segment"),
            PatchOutcome::MissingInfo => write!(f, "missing info"),
            PatchOutcome::MissingTimecodeScale => write!(f, "missing timecode scale"),
            PatchOutcome::AlreadyPresent => write!(f, "already present"),
            PatchOutcome::Replaced => write!(f, "replaced"),
            PatchOutcome::Inserted => write!(f, "inserted"),
        }
    }
}

/// Write `duration_ms` into `Segment/Info/Duration` unless it already holds
/// a positive value. NaN is not positive, so it gets overwritten too.
///
/// On modification TimecodeScale is forced to one millisecond, since the
/// duration is expressed in ticks.
pub fn patch(root: &mut [Element], duration_ms: f64, logger: &mut Logger<'_>) -> PatchOutcome {
    let Some(segment) = find_mut(root, SEGMENT) else {
        diag!(logger, "Segment section is missing");
        return PatchOutcome::MissingSegment;
    };
    let Some(info) = segment.child_mut(INFO).and_then(Element::children_mut) else {
        diag!(logger, "Info section is missing");
        return PatchOutcome::MissingInfo;
    };
    if find(info, TIMECODE_SCALE).is_none() {
        diag!(logger, "TimecodeScale section is missing");
        return PatchOutcome::MissingTimecodeScale;
    }

    let outcome = match find_mut(info, DURATION) {
        Some(duration) => {
            if duration.as_float().is_some_and(|value| value > 0.0) {
                diag!(logger, "Duration section is present");
                return PatchOutcome::AlreadyPresent;
            }
            diag!(
                logger,
                "Duration section is present, but the value is empty. Applying {} ms.",
                duration_ms
            );
            let mut value = match &duration.value {
                ElementValue::Float(value) => value.clone(),
                _ => Float::F64(0.0),
            };
            value.set(duration_ms);
            duration.value = ElementValue::Float(value);
            PatchOutcome::Replaced
        }
        None => {
            diag!(
                logger,
                "Duration section is missing. Applying {} ms.",
                duration_ms
            );
            info.push(Element::float(DURATION, duration_ms));
            PatchOutcome::Inserted
        }
    };

    if let Some(scale) = find_mut(info, TIMECODE_SCALE) {
        scale.value = ElementValue::UnsignedInt(UnsignedInt::new(MILLISECOND_TIMECODE_SCALE));
    }

    outcome
}

/// Boolean form of [`patch`]: true iff the tree was modified.
pub fn fix_duration(root: &mut [Element], duration_ms: f64, logger: &mut Logger<'_>) -> bool {
    patch(root, duration_ms, logger).is_modified()
}

/// Current segment duration in milliseconds, if the file declares one.
pub fn read_duration_ms(root: &[Element]) -> Option<f64> {
    let info = find(root, SEGMENT)?.child(INFO)?;
    let ticks = info.child(DURATION)?.as_float()?;
    let scale = info
        .child(TIMECODE_SCALE)
        .and_then(Element::as_unsigned)
        .unwrap_or(MILLISECOND_TIMECODE_SCALE);
    Some(ticks * scale as f64 / 1_000_000.0)
}
