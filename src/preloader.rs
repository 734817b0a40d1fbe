use crate::constants::{
    PRELOADER_DURATION_MS, PRELOADER_JITTER_MAX, PRELOADER_STATUSES, PRELOADER_TICK_MS,
};
use rand::rngs::StdRng;
use rand::Rng;

/// Fake load progress: a fixed step per tick plus a little random jitter.
pub struct Preloader {
    progress: u32,
    increment: u32,
    rng: StdRng,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreloaderTick {
    pub progress: u32,
    pub status: &'static str,
    pub done: bool,
}

impl Preloader {
    pub fn new(rng: StdRng) -> Self {
        Self {
            progress: 0,
            increment: increment_per_tick(PRELOADER_DURATION_MS, PRELOADER_TICK_MS),
            rng,
        }
    }

    pub fn progress(&self) -> u32 {
        self.progress
    }

    pub fn tick(&mut self) -> PreloaderTick {
        let jitter = self.rng.gen_range(0..PRELOADER_JITTER_MAX);
        self.progress = (self.progress + self.increment + jitter).min(100);
        PreloaderTick {
            progress: self.progress,
            status: status_for(self.progress),
            done: self.progress >= 100,
        }
    }
}

/// `ceil(100 / (duration / tick))`, at least 1.
#[inline]
pub fn increment_per_tick(duration_ms: u32, tick_ms: u32) -> u32 {
    let ticks = (duration_ms / tick_ms.max(1)).max(1);
    100u32.div_ceil(ticks).max(1)
}

#[inline]
pub fn status_for(progress: u32) -> &'static str {
    let n = PRELOADER_STATUSES.len();
    let idx = (progress.min(100) as usize * n) / 100;
    PRELOADER_STATUSES[idx.min(n - 1)]
}
