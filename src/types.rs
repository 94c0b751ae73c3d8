use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Simulated clock value, in minutes since midnight.
///
/// Runs may go past 24h; only configured start times are restricted to a
/// single day.
pub type Minute = u32;

/// Minutes in a day. Fixed start times must be below this.
pub const MINUTES_PER_DAY: Minute = 24 * 60;

/// Which scoring formula the engine uses to rank ready tasks.
///
/// - `Utility`: fixed tasks score 100, flexible tasks lose points for open
///   dependencies and short durations and gain an importance bonus.
/// - `TimeAffinity`: tasks close to their preferred start time, short tasks
///   and tasks with few open dependencies score higher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyKind {
    Utility,
    TimeAffinity,
}

impl Default for PolicyKind {
    fn default() -> Self {
        PolicyKind::Utility
    }
}

impl FromStr for PolicyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "utility" | "utility-penalty" => Ok(PolicyKind::Utility),
            "time-affinity" | "time_affinity" => Ok(PolicyKind::TimeAffinity),
            other => Err(format!(
                "invalid policy: {other} (expected \"utility\" or \"time-affinity\")"
            )),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyKind::Utility => f.write_str("utility"),
            PolicyKind::TimeAffinity => f.write_str("time-affinity"),
        }
    }
}

/// How much a task matters to whoever wrote the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    High,
    Medium,
    Low,
}

impl Default for Importance {
    fn default() -> Self {
        Importance::Medium
    }
}

impl FromStr for Importance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Importance::High),
            "medium" => Ok(Importance::Medium),
            "low" => Ok(Importance::Low),
            other => Err(format!(
                "invalid importance: {other} (expected \"high\", \"medium\" or \"low\")"
            )),
        }
    }
}

/// Parse a clock value: either `"HH:MM"` or a plain number of minutes.
pub fn parse_clock(s: &str) -> Result<Minute, String> {
    let s = s.trim();

    if let Some((h, m)) = s.split_once(':') {
        let hours: Minute = h
            .trim()
            .parse()
            .map_err(|_| format!("invalid hour in clock value {s:?}"))?;
        let minutes: Minute = m
            .trim()
            .parse()
            .map_err(|_| format!("invalid minute in clock value {s:?}"))?;
        if minutes >= 60 {
            return Err(format!("minute out of range in clock value {s:?}"));
        }
        return hours
            .checked_mul(60)
            .and_then(|h| h.checked_add(minutes))
            .ok_or_else(|| format!("clock value {s:?} is too large"));
    }

    s.parse()
        .map_err(|_| format!("invalid clock value {s:?} (expected \"HH:MM\" or minutes)"))
}

/// Render a clock value as `9h05`.
pub fn format_clock(t: Minute) -> String {
    format!("{}h{:02}", t / 60, t % 60)
}

/// Render an elapsed span as `13h10min`.
pub fn format_span(minutes: Minute) -> String {
    format!("{}h{:02}min", minutes / 60, minutes % 60)
}
