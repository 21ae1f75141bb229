// SPDX-License-Identifier: MPL-2.0
//! In-memory diagnostic channel.
//!
//! Data-loading failures are swallowed by design: nothing is surfaced to the
//! user beyond the absence of fresh data. So that the failures stay
//! observable, every caught error is recorded here (and echoed to stderr).
//! Events are kept in a memory-bounded ring buffer that evicts the oldest
//! entries when capacity is reached.

use crate::config::DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY;
use chrono::{DateTime, Local};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Severity of a diagnostic event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// One recorded diagnostic event.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    pub timestamp: DateTime<Local>,
    pub severity: Severity,
    pub message: String,
}

/// A circular buffer with fixed capacity.
///
/// When the buffer is full, pushing a new element evicts the oldest one.
/// Elements are stored in chronological order (oldest first).
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes an element to the buffer, evicting the oldest if at capacity.
    pub fn push(&mut self, item: T) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    /// Returns an iterator over the elements in chronological order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}

/// Collector holding the recorded events.
#[derive(Debug)]
pub struct Diagnostics {
    events: CircularBuffer<DiagnosticEvent>,
}

impl Diagnostics {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            events: CircularBuffer::new(capacity),
        }
    }

    pub fn record(&mut self, severity: Severity, message: impl Into<String>) {
        let message = message.into();
        eprintln!("[{severity:?}] {message}");
        self.events.push(DiagnosticEvent {
            timestamp: Local::now(),
            severity,
            message,
        });
    }

    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.events.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
    }
}

/// Shared handle to the diagnostics collector.
///
/// Recording happens on the update loop; the mutex exists so background
/// tasks could report as well without further plumbing.
pub type SharedDiagnostics = Arc<Mutex<Diagnostics>>;

/// Creates a shared diagnostics collector with the default capacity.
#[must_use]
pub fn create_diagnostics() -> SharedDiagnostics {
    Arc::new(Mutex::new(Diagnostics::default()))
}

/// Records an event through a shared handle.
pub fn record(diagnostics: &SharedDiagnostics, severity: Severity, message: impl Into<String>) {
    if let Ok(mut collector) = diagnostics.lock() {
        collector.record(severity, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circular_buffer_push_and_retrieve() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::new(5);

        buffer.push(1);
        buffer.push(2);
        buffer.push(3);

        let items: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn circular_buffer_overflow_evicts_oldest() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::new(3);

        buffer.push(1);
        buffer.push(2);
        buffer.push(3);
        buffer.push(4); // Evicts 1
        buffer.push(5); // Evicts 2

        let items: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(items, vec![3, 4, 5]);
    }

    #[test]
    fn circular_buffer_zero_capacity_is_clamped() {
        let buffer: CircularBuffer<i32> = CircularBuffer::new(0);
        assert_eq!(buffer.capacity(), 1);
    }

    #[test]
    fn circular_buffer_len_and_clear() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::new(5);
        assert!(buffer.is_empty());

        buffer.push(1);
        buffer.push(2);
        assert_eq!(buffer.len(), 2);

        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 5);
    }

    #[test]
    fn record_stores_event_with_severity() {
        let mut diagnostics = Diagnostics::new(10);
        diagnostics.record(Severity::Error, "profile data load failed");

        assert_eq!(diagnostics.len(), 1);
        let event = diagnostics.events().next().expect("one event");
        assert_eq!(event.severity, Severity::Error);
        assert!(event.message.contains("load failed"));
    }

    #[test]
    fn shared_handle_records_across_clones() {
        let shared = create_diagnostics();
        let clone = shared.clone();

        record(&clone, Severity::Warning, "member index unavailable");

        let collector = shared.lock().expect("lock");
        assert_eq!(collector.len(), 1);
    }
}
