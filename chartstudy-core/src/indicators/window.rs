//! Sliding-window building blocks shared by the windowed indicators.
//!
//! - `MonotonicWindow`: rolling max or min with the index of the extreme,
//!   amortized O(1) per bar. Ties resolve to the most recent index.
//! - `RunningSum`: rolling sum over the last `window` pushes.
//!
//! Buffers grow with the data rather than the window, so a huge period on a
//! short history costs no more than the history itself.

use crate::series::{empty, Series};
use std::collections::VecDeque;

/// Upper bound on up-front buffer capacity.
const MAX_PREALLOC: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Extreme {
    Max,
    Min,
}

/// Rolling extreme over the last `window` indices.
#[derive(Debug, Clone)]
pub struct MonotonicWindow {
    window: usize,
    extreme: Extreme,
    deque: VecDeque<(usize, f64)>,
}

impl MonotonicWindow {
    pub fn max(window: usize) -> Self {
        Self::new(window, Extreme::Max)
    }

    pub fn min(window: usize) -> Self {
        Self::new(window, Extreme::Min)
    }

    fn new(window: usize, extreme: Extreme) -> Self {
        Self {
            window: window.max(1),
            extreme,
            deque: VecDeque::with_capacity(window.clamp(1, MAX_PREALLOC)),
        }
    }

    /// Push the value at `index`. Indices must be pushed in increasing order.
    pub fn push(&mut self, index: usize, value: f64) {
        while let Some(&(_, back)) = self.deque.back() {
            let dominated = match self.extreme {
                Extreme::Max => back <= value,
                Extreme::Min => back >= value,
            };
            if !dominated {
                break;
            }
            self.deque.pop_back();
        }
        self.deque.push_back((index, value));

        while let Some(&(front, _)) = self.deque.front() {
            if front + self.window <= index {
                self.deque.pop_front();
            } else {
                break;
            }
        }
    }

    /// Current `(index, value)` of the extreme.
    pub fn extreme(&self) -> Option<(usize, f64)> {
        self.deque.front().copied()
    }

    pub fn value(&self) -> Option<f64> {
        self.extreme().map(|(_, v)| v)
    }
}

/// Rolling sum over the last `window` values.
///
/// The running total is rebuilt from the buffer once every `window` pushes,
/// so rounding left behind by values that have left the window does not
/// accumulate. A window holding only zeros sums to exactly 0.
#[derive(Debug, Clone)]
pub struct RunningSum {
    window: usize,
    buf: VecDeque<f64>,
    sum: f64,
    nonzero: usize,
    since_rebuild: usize,
}

impl RunningSum {
    pub fn new(window: usize) -> Self {
        let window = window.max(1);
        Self {
            window,
            buf: VecDeque::with_capacity(window.min(MAX_PREALLOC)),
            sum: 0.0,
            nonzero: 0,
            since_rebuild: 0,
        }
    }

    pub fn push(&mut self, value: f64) {
        if self.buf.len() == self.window {
            if let Some(leaving) = self.buf.pop_front() {
                self.sum -= leaving;
                if leaving != 0.0 {
                    self.nonzero -= 1;
                }
            }
        }
        self.buf.push_back(value);
        self.sum += value;
        if value != 0.0 {
            self.nonzero += 1;
        }

        self.since_rebuild += 1;
        if self.since_rebuild >= self.window {
            self.sum = self.buf.iter().sum();
            self.since_rebuild = 0;
        }
    }

    pub fn is_full(&self) -> bool {
        self.buf.len() == self.window
    }

    pub fn sum(&self) -> f64 {
        if self.nonzero == 0 {
            0.0
        } else {
            self.sum
        }
    }

    /// Mean of the window once it is full.
    pub fn mean(&self) -> Option<f64> {
        self.is_full().then(|| self.sum / self.window as f64)
    }
}

/// Highest value of the trailing `window` values, from index `window - 1`.
pub fn rolling_max(values: &[f64], window: usize) -> Series {
    rolling(values, MonotonicWindow::max(window), window)
}

/// Lowest value of the trailing `window` values, from index `window - 1`.
pub fn rolling_min(values: &[f64], window: usize) -> Series {
    rolling(values, MonotonicWindow::min(window), window)
}

fn rolling(values: &[f64], mut mono: MonotonicWindow, window: usize) -> Series {
    let mut out = empty(values.len());
    if window == 0 {
        return out;
    }
    for (i, &v) in values.iter().enumerate() {
        mono.push(i, v);
        if i + 1 >= window {
            out[i] = mono.value();
        }
    }
    out
}
