//! Mock transports for testing.
//!
//! [`MockTransport`] records every message and can be switched between
//! connected and disconnected. Clones share the same recording, so a test can
//! keep a handle while the engine owns another.

use std::sync::Arc;

use faderbank_engine::{MessageSink, Transport};
use parking_lot::Mutex;

/// One recorded send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentMessage {
    /// Destination address.
    pub address: String,
    /// Transmitted value.
    pub value: i32,
}

impl SentMessage {
    /// A message as the engine would send it.
    pub fn new(address: impl Into<String>, value: i32) -> Self {
        Self {
            address: address.into(),
            value,
        }
    }
}

#[derive(Debug, Default)]
struct MockState {
    connected: bool,
    sent: Vec<SentMessage>,
    connectivity_checks: usize,
}

/// Recording transport with a connectivity switch.
///
/// # Example
///
/// ```rust
/// use faderbank_engine::Transport;
/// use faderbank_test_helpers::mock::MockTransport;
///
/// let mut transport = MockTransport::connected();
/// let handle = transport.clone();
///
/// transport.send("/volume", 64);
/// assert_eq!(handle.values(), vec![64]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    /// A connected transport.
    pub fn connected() -> Self {
        let transport = Self::default();
        transport.set_connected(true);
        transport
    }

    /// A disconnected transport.
    pub fn disconnected() -> Self {
        Self::default()
    }

    /// Flip connectivity.
    pub fn set_connected(&self, connected: bool) {
        self.state.lock().connected = connected;
    }

    /// Every recorded message, oldest first.
    pub fn sent(&self) -> Vec<SentMessage> {
        self.state.lock().sent.clone()
    }

    /// Recorded values, oldest first.
    pub fn values(&self) -> Vec<i32> {
        self.state.lock().sent.iter().map(|m| m.value).collect()
    }

    /// Recorded values sent to `address`.
    pub fn values_for(&self, address: &str) -> Vec<i32> {
        self.state
            .lock()
            .sent
            .iter()
            .filter(|m| m.address == address)
            .map(|m| m.value)
            .collect()
    }

    /// The most recent message.
    pub fn last(&self) -> Option<SentMessage> {
        self.state.lock().sent.last().cloned()
    }

    /// Number of recorded messages.
    pub fn len(&self) -> usize {
        self.state.lock().sent.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.state.lock().sent.is_empty()
    }

    /// How often the engine asked whether the transport is connected.
    pub fn connectivity_checks(&self) -> usize {
        self.state.lock().connectivity_checks
    }

    /// Forget recorded messages.
    pub fn clear(&self) {
        self.state.lock().sent.clear();
    }

    fn record(&self, address: &str, value: i32) {
        self.state.lock().sent.push(SentMessage::new(address, value));
    }
}

impl Transport for MockTransport {
    fn is_connected(&self) -> bool {
        let mut state = self.state.lock();
        state.connectivity_checks += 1;
        state.connected
    }

    fn send(&mut self, address: &str, value: i32) {
        self.record(address, value);
    }
}

impl MessageSink for MockTransport {
    fn send(&mut self, address: &str, value: i32) {
        self.record(address, value);
    }
}
