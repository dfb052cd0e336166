use std::fmt::Display;
use std::time::{Duration, Instant};

/// Wall-clock timer for a single CLI operation.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Elapsed {
        Elapsed(self.started.elapsed())
    }
}

/// Runs `op` and returns its output together with how long it took.
pub fn timed<T>(op: impl FnOnce() -> T) -> (T, Elapsed) {
    let watch = Stopwatch::start();
    let out = op();
    (out, watch.elapsed())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Elapsed(Duration);

impl Elapsed {
    pub fn as_duration(&self) -> Duration {
        self.0
    }
}

impl Display for Elapsed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} microseconds ({:.6} seconds)",
            self.0.as_micros(),
            self.0.as_secs_f64()
        )
    }
}
