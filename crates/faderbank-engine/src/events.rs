//! Control metadata with change notifications.
//!
//! UI-facing properties (name, enabled, width) live outside the tick path.
//! Listeners subscribe to [`ControlData`] and are told about each property
//! that actually changed.

use std::fmt;

use faderbank_errors::{Result, ValidationError};

/// Handle returned by [`ControlData::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// A property change.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlEvent {
    /// Display name changed.
    NameChanged(String),
    /// Control was shown or hidden.
    EnabledChanged(bool),
    /// Layout width changed.
    WidthChanged(f32),
}

type Listener = Box<dyn FnMut(&ControlEvent) + Send>;

/// Observable UI metadata for one control.
///
/// # Example
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use faderbank_engine::{ControlData, ControlEvent};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
///
/// let mut data = ControlData::new("Cutoff");
/// data.subscribe(move |event| {
///     if let Ok(mut events) = sink.lock() {
///         events.push(event.clone());
///     }
/// });
///
/// data.set_enabled(false);
/// data.set_enabled(false);
///
/// let events = seen.lock().map(|e| e.clone()).unwrap_or_default();
/// assert_eq!(events, vec![ControlEvent::EnabledChanged(false)]);
/// ```
pub struct ControlData {
    name: String,
    enabled: bool,
    width: f32,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl fmt::Debug for ControlData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlData")
            .field("name", &self.name)
            .field("enabled", &self.enabled)
            .field("width", &self.width)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ControlData {
    /// Default layout width.
    pub const DEFAULT_WIDTH: f32 = 1.0;

    /// Enabled metadata at the default width.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            width: Self::DEFAULT_WIDTH,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the control is shown and ticking.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Layout width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Register a listener for every subsequent change.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&ControlEvent) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Drop a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Rename. Notifies only when the name differs.
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        if name == self.name {
            return;
        }
        self.name.clone_from(&name);
        self.emit(&ControlEvent::NameChanged(name));
    }

    /// Show or hide. Notifies only when the flag flips.
    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled == self.enabled {
            return;
        }
        self.enabled = enabled;
        self.emit(&ControlEvent::EnabledChanged(enabled));
    }

    /// Resize. Notifies only when the width differs.
    ///
    /// # Errors
    ///
    /// Returns a validation error for non-finite or non-positive widths; the
    /// stored width is left unchanged.
    pub fn set_width(&mut self, width: f32) -> Result<()> {
        if !width.is_finite() {
            return Err(ValidationError::non_finite("width", width).into());
        }
        if width <= 0.0 {
            return Err(ValidationError::out_of_range("width", width, f32::MIN_POSITIVE, f32::MAX).into());
        }
        if faderbank_filters::same_value(width, self.width) {
            return Ok(());
        }
        self.width = width;
        self.emit(&ControlEvent::WidthChanged(width));
        Ok(())
    }

    fn emit(&mut self, event: &ControlEvent) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }
}
