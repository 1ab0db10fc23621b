/// Clock sampling for the benchmark timer
use crate::types::{ClockKind, Result};
use nix::sys::resource::{getrusage, UsageWho};
use std::time::{Duration, Instant};

/// A point read from a clock, measured from that clock's own origin
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockSample(Duration);

impl ClockSample {
    /// Time between `earlier` and this sample, zero if `earlier` is later
    pub fn since(&self, earlier: ClockSample) -> Duration {
        self.0.saturating_sub(earlier.0)
    }

    pub fn as_duration(&self) -> Duration {
        self.0
    }
}

/// Reads process CPU time or monotonic wall time
#[derive(Debug)]
pub struct Clock {
    kind: ClockKind,
    origin: Instant,
}

impl Clock {
    pub fn new(kind: ClockKind) -> Self {
        Self {
            kind,
            origin: Instant::now(),
        }
    }

    pub fn kind(&self) -> ClockKind {
        self.kind
    }

    /// Take a sample from the configured clock
    pub fn sample(&self) -> Result<ClockSample> {
        match self.kind {
            ClockKind::Cpu => process_cpu_time().map(ClockSample),
            ClockKind::Wall => Ok(ClockSample(self.origin.elapsed())),
        }
    }
}

/// User plus system CPU time consumed by this process so far
pub fn process_cpu_time() -> Result<Duration> {
    let usage = getrusage(UsageWho::RUSAGE_SELF)?;
    let user = usage.user_time();
    let system = usage.system_time();
    Ok(timeval_to_duration(user.tv_sec() as i64, user.tv_usec() as i64)
        + timeval_to_duration(system.tv_sec() as i64, system.tv_usec() as i64))
}

fn timeval_to_duration(secs: i64, micros: i64) -> Duration {
    Duration::from_secs(secs.max(0) as u64) + Duration::from_micros(micros.max(0) as u64)
}
