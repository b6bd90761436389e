/*!
 * Timeline Segments
 * Contiguous, non-overlapping intervals of processor occupancy
 */

use crate::core::types::{Pid, Ticks};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const IDLE: &str = "IDLE";

/// What occupies the processor during a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occupant {
    Idle,
    Process(Pid),
}

impl Occupant {
    pub fn pid(&self) -> Option<Pid> {
        match self {
            Self::Idle => None,
            Self::Process(pid) => Some(*pid),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

impl fmt::Display for Occupant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str(IDLE),
            Self::Process(pid) => write!(f, "P{}", pid),
        }
    }
}

// Serialized as the string "IDLE" or the bare pid
impl Serialize for Occupant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Idle => serializer.serialize_str(IDLE),
            Self::Process(pid) => serializer.serialize_u32(*pid),
        }
    }
}

impl<'de> Deserialize<'de> for Occupant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Inner {
            Pid(Pid),
            Tag(String),
        }

        match Inner::deserialize(deserializer)? {
            Inner::Pid(pid) => Ok(Self::Process(pid)),
            Inner::Tag(tag) if tag == IDLE => Ok(Self::Idle),
            Inner::Tag(tag) => Err(serde::de::Error::custom(format!(
                "Invalid occupant '{}'. Valid: IDLE or a process id",
                tag
            ))),
        }
    }
}

/// One interval of processor occupancy, `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub occupant: Occupant,
    pub start: Ticks,
    pub end: Ticks,
}

impl Segment {
    pub fn new(occupant: Occupant, start: Ticks, end: Ticks) -> Self {
        debug_assert!(end > start, "Empty segment {}..{}", start, end);
        Self {
            occupant,
            start,
            end,
        }
    }

    #[inline]
    pub fn duration(&self) -> Ticks {
        self.end - self.start
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.occupant, self.start, self.end)
    }
}

/// Whether segments start at 0 and each one begins where the previous ended
pub fn is_contiguous(segments: &[Segment]) -> bool {
    let mut cursor = 0;
    for segment in segments {
        if segment.start != cursor || segment.end <= segment.start {
            return false;
        }
        cursor = segment.end;
    }
    true
}

/// Append-only timeline recorder
///
/// At most one segment is open at a time; it is finalized on a context
/// switch or completion.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    segments: Vec<Segment>,
    open: Option<(Occupant, Ticks)>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// End of the last finalized segment
    fn cursor(&self) -> Ticks {
        self.segments.last().map(|s| s.end).unwrap_or(0)
    }

    /// Append a finalized segment
    pub fn push(&mut self, occupant: Occupant, start: Ticks, end: Ticks) {
        debug_assert!(self.open.is_none(), "Cannot push while a segment is open");
        debug_assert_eq!(
            start,
            self.cursor(),
            "Segment {}..{} leaves a gap or overlaps",
            start,
            end
        );
        self.segments.push(Segment::new(occupant, start, end));
    }

    /// Open a segment for `occupant` starting at `at`
    pub fn open(&mut self, occupant: Occupant, at: Ticks) {
        debug_assert!(self.open.is_none(), "A segment is already open");
        debug_assert_eq!(at, self.cursor(), "Opened segment leaves a gap");
        self.open = Some((occupant, at));
    }

    /// Finalize the open segment at `at`
    pub fn close(&mut self, at: Ticks) -> Option<Segment> {
        let (occupant, start) = self.open.take()?;
        let segment = Segment::new(occupant, start, at);
        self.segments.push(segment);
        Some(segment)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<Segment> {
        debug_assert!(self.open.is_none(), "Timeline finished with an open segment");
        self.segments
    }
}
