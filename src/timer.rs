//! # Timer Module
//!
//! The game clock is split in two:
//! - [`Stopwatch`] is a plain tick counter owned by the game state. It only
//!   moves when somebody tells it to, which keeps the game logic testable.
//! - [`Ticker`] is the periodic tick source. It runs on its own thread and
//!   hands ticks to the UI loop over a channel, so ticks are consumed in the
//!   same place as key presses and mouse clicks.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Counts fixed-size ticks and converts them to elapsed time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stopwatch {
    ticks: u64,
    tick_interval: Duration,
}

impl Stopwatch {
    pub fn new(tick_interval: Duration) -> Self {
        Self {
            ticks: 0,
            tick_interval,
        }
    }

    pub fn advance(&mut self, ticks: u64) {
        self.ticks = self.ticks.saturating_add(ticks);
    }

    pub fn reset(&mut self) {
        self.ticks = 0;
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn elapsed(&self) -> Duration {
        let nanos = self.tick_interval.as_nanos().saturating_mul(self.ticks as u128);
        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }

    /// Elapsed seconds with two decimals, e.g. `"3.27"`
    pub fn display(&self) -> String {
        format_seconds(self.elapsed())
    }
}

/// Formats a duration as seconds with two decimals
pub fn format_seconds(elapsed: Duration) -> String {
    format!("{:.2}", elapsed.as_secs_f64())
}

/// A running periodic tick source
///
/// At most one of these should exist per game. Starting a new game stops the
/// old ticker before creating the next one; dropping a ticker stops it and
/// joins its thread.
pub struct Ticker {
    handle: Option<JoinHandle<()>>,
    rx_tick: Receiver<()>,
    tx_stop: Sender<()>,
    interval: Duration,
}

impl Ticker {
    /// Spawns the tick thread
    ///
    /// Ticks are scheduled against deadlines rather than slept back to back,
    /// so a slow consumer sees the backlog on its next [`Ticker::drain`]
    /// instead of losing time. Between ticks the thread waits on the stop
    /// channel, so [`Ticker::stop`] returns without waiting out the interval.
    pub fn start(interval: Duration) -> Self {
        let (tx_tick, rx_tick) = mpsc::channel();
        let (tx_stop, rx_stop) = mpsc::channel::<()>();

        let handle = thread::spawn(move || {
            let mut deadline = Instant::now() + interval;
            loop {
                let wait = deadline.saturating_duration_since(Instant::now());
                match rx_stop.recv_timeout(wait) {
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    Err(RecvTimeoutError::Timeout) => {}
                }
                if tx_tick.send(()).is_err() {
                    break;
                }
                deadline += interval;
            }
        });

        tracing::debug!(interval_ms = interval.as_millis() as u64, "ticker started");

        Self {
            handle: Some(handle),
            rx_tick,
            tx_stop,
            interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Takes every tick delivered since the last call
    pub fn drain(&self) -> u64 {
        if self.handle.is_none() {
            return 0;
        }
        self.rx_tick.try_iter().count() as u64
    }

    /// Stops the thread and discards ticks that were still queued
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = self.tx_stop.send(());
            let _ = handle.join();
            tracing::debug!("ticker stopped");
        }
        while self.rx_tick.try_recv().is_ok() {}
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
