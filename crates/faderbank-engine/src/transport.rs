//! Outbound transport seam.
//!
//! The engine never opens sockets. Hosts hand it a [`Transport`] each tick;
//! the engine asks whether it is connected and, if so, sends fire-and-forget
//! messages. Connection state is injected rather than read from a global.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Destination for transmitted control values.
///
/// `send` must not block the tick for long and has no return value: failures
/// are the transport's business and are never retried by the engine.
pub trait Transport {
    /// Whether messages can currently be delivered.
    fn is_connected(&self) -> bool;

    /// Deliver `value` to `address`.
    fn send(&mut self, address: &str, value: i32);
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn is_connected(&self) -> bool {
        (**self).is_connected()
    }

    fn send(&mut self, address: &str, value: i32) {
        (**self).send(address, value);
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn is_connected(&self) -> bool {
        (**self).is_connected()
    }

    fn send(&mut self, address: &str, value: i32) {
        (**self).send(address, value);
    }
}

/// Reports whether the outbound link is usable.
pub trait ConnectionStatus {
    /// Whether messages can currently be delivered.
    fn is_connected(&self) -> bool;
}

/// Writes messages without caring about connection state.
pub trait MessageSink {
    /// Deliver `value` to `address`.
    fn send(&mut self, address: &str, value: i32);
}

/// Shared, lock-free connection flag.
///
/// Clones share the same flag, so the network layer can keep one clone and
/// flip it while the engine reads another.
///
/// # Example
///
/// ```
/// use faderbank_engine::{ConnectionFlag, ConnectionStatus};
///
/// let flag = ConnectionFlag::new();
/// let reader = flag.clone();
/// assert!(!reader.is_connected());
///
/// flag.set_connected();
/// assert!(reader.is_connected());
///
/// flag.invalid_client();
/// assert!(!reader.is_connected());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ConnectionFlag {
    connected: Arc<AtomicBool>,
}

impl ConnectionFlag {
    /// A flag that starts disconnected.
    pub fn new() -> Self {
        Self::default()
    }

    /// A flag with an explicit initial state.
    pub fn with_state(connected: bool) -> Self {
        Self {
            connected: Arc::new(AtomicBool::new(connected)),
        }
    }

    /// Mark the link as usable.
    pub fn set_connected(&self) {
        self.connected.store(true, Ordering::Release);
    }

    /// Mark the client as invalid, suppressing all sends.
    pub fn invalid_client(&self) {
        self.connected.store(false, Ordering::Release);
    }

    /// Set the state directly.
    pub fn set(&self, connected: bool) {
        self.connected.store(connected, Ordering::Release);
    }
}

impl ConnectionStatus for ConnectionFlag {
    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Acquire)
    }
}

/// A [`Transport`] built from a status provider and a message sink.
#[derive(Debug)]
pub struct StatusGatedTransport<S, T> {
    status: S,
    sink: T,
}

impl<S: ConnectionStatus, T: MessageSink> StatusGatedTransport<S, T> {
    /// Combine a status provider with a sink.
    pub fn new(status: S, sink: T) -> Self {
        Self { status, sink }
    }

    /// The status provider.
    pub fn status(&self) -> &S {
        &self.status
    }

    /// The sink.
    pub fn sink(&self) -> &T {
        &self.sink
    }

    /// Split back into parts.
    pub fn into_parts(self) -> (S, T) {
        (self.status, self.sink)
    }
}

impl<S: ConnectionStatus, T: MessageSink> Transport for StatusGatedTransport<S, T> {
    fn is_connected(&self) -> bool {
        self.status.is_connected()
    }

    fn send(&mut self, address: &str, value: i32) {
        self.sink.send(address, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct VecSink(Vec<(String, i32)>);

    impl MessageSink for VecSink {
        fn send(&mut self, address: &str, value: i32) {
            self.0.push((address.to_string(), value));
        }
    }

    #[test]
    fn test_connection_flag_clones_share_state() {
        let flag = ConnectionFlag::new();
        let other = flag.clone();
        other.set(true);
        assert!(flag.is_connected());
        flag.invalid_client();
        assert!(!other.is_connected());
    }

    #[test]
    fn test_with_state() {
        assert!(ConnectionFlag::with_state(true).is_connected());
        assert!(!ConnectionFlag::with_state(false).is_connected());
    }

    #[test]
    fn test_status_gated_transport_reports_status() {
        let flag = ConnectionFlag::new();
        let mut transport = StatusGatedTransport::new(flag.clone(), VecSink::default());
        assert!(!Transport::is_connected(&transport));

        flag.set_connected();
        assert!(Transport::is_connected(&transport));

        transport.send("/a", 3);
        let (_, sink) = transport.into_parts();
        assert_eq!(sink.0, vec![("/a".to_string(), 3)]);
    }

    #[test]
    fn test_mut_ref_forwards() {
        let mut transport = StatusGatedTransport::new(ConnectionFlag::with_state(true), VecSink::default());
        {
            let mut by_ref: &mut StatusGatedTransport<_, _> = &mut transport;
            assert!(Transport::is_connected(&by_ref));
            Transport::send(&mut by_ref, "/b", 9);
        }
        assert_eq!(transport.sink().0.len(), 1);
    }
}
