/*!
 * Scheduler Types
 * Policy identifiers, quantum and run parameters
 */

use crate::core::errors::SimError;
use crate::core::limits::{DEFAULT_QUANTUM, MIN_QUANTUM};
use crate::core::types::{SimResult, Ticks};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Scheduling policy identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// First-come first-served
    Fcfs,
    /// Shortest job first, non-preemptive
    Sjf,
    /// Shortest remaining time first (preemptive SJF)
    Srtf,
    /// Lowest priority value first, non-preemptive
    Priority,
    /// Lowest priority value first, re-evaluated every tick
    PriorityPreemptive,
    /// Priority with arrival/id tie-breaks, non-preemptive
    Focus,
    /// Priority with remaining-time tie-break, re-evaluated every tick
    FocusPreemptive,
    /// FIFO ready queue with a fixed time quantum
    RoundRobin,
}

/// How the driver advances time for a policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Run each decision for its whole slice (full burst or one quantum)
    WholeBurst,
    /// Re-evaluate every single tick
    UnitTime,
}

impl Policy {
    /// Every policy, in presentation order
    pub const ALL: [Policy; 8] = [
        Self::Fcfs,
        Self::Sjf,
        Self::Srtf,
        Self::Priority,
        Self::PriorityPreemptive,
        Self::Focus,
        Self::FocusPreemptive,
        Self::RoundRobin,
    ];

    /// Canonical string representation
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::Srtf => "srtf",
            Self::Priority => "priority",
            Self::PriorityPreemptive => "priority_preemptive",
            Self::Focus => "focus",
            Self::FocusPreemptive => "focus_preemptive",
            Self::RoundRobin => "round_robin",
        }
    }

    /// Whether a running process can be switched out mid-burst
    pub const fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Self::Srtf | Self::PriorityPreemptive | Self::FocusPreemptive | Self::RoundRobin
        )
    }

    pub const fn dispatch(&self) -> Dispatch {
        match self {
            Self::Srtf | Self::PriorityPreemptive | Self::FocusPreemptive => Dispatch::UnitTime,
            _ => Dispatch::WholeBurst,
        }
    }
}

impl FromStr for Policy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "fcfs" | "fifo" | "first_come_first_served" => Ok(Self::Fcfs),
            "sjf" | "sjf_non" | "sjf_nonpreemptive" => Ok(Self::Sjf),
            "srtf" | "sjf_preemptive" => Ok(Self::Srtf),
            "priority" | "prio" | "priority_non" | "priority_nonpreemptive" => Ok(Self::Priority),
            "priority_preemptive" | "prio_preemptive" => Ok(Self::PriorityPreemptive),
            "focus" | "focus_non" | "focus_nonpreemptive" => Ok(Self::Focus),
            "focus_preemptive" => Ok(Self::FocusPreemptive),
            "round_robin" | "roundrobin" | "rr" => Ok(Self::RoundRobin),
            _ => Err(SimError::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Policy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Policy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Round-Robin time quantum in ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TimeQuantum(Ticks);

impl TimeQuantum {
    /// Create a validated quantum
    pub fn new(ticks: i64) -> SimResult<Self> {
        if ticks < MIN_QUANTUM {
            return Err(SimError::InvalidQuantum(ticks));
        }
        Ok(Self(ticks as Ticks))
    }

    #[inline(always)]
    pub const fn ticks(&self) -> Ticks {
        self.0
    }
}

impl Default for TimeQuantum {
    fn default() -> Self {
        Self(DEFAULT_QUANTUM)
    }
}

impl<'de> Deserialize<'de> for TimeQuantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ticks = i64::deserialize(deserializer)?;
        Self::new(ticks).map_err(serde::de::Error::custom)
    }
}

/// Optional per-run parameters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<i64>,
}

impl SimParams {
    pub fn with_quantum(quantum: i64) -> Self {
        Self {
            quantum: Some(quantum),
        }
    }

    /// Resolve the quantum a policy will use
    ///
    /// Round-Robin rejects a quantum below 1 and falls back to the default
    /// when none was given. Other policies ignore the parameter.
    pub fn resolve_quantum(&self, policy: Policy) -> SimResult<Option<TimeQuantum>> {
        if policy != Policy::RoundRobin {
            return Ok(None);
        }
        match self.quantum {
            Some(ticks) => TimeQuantum::new(ticks).map(Some),
            None => Ok(Some(TimeQuantum::default())),
        }
    }
}
