//! Toast state management
//!
//! Keeps a stack of transient toasts. Each toast has its own id, kind and
//! lifetime; expired toasts are pruned on every render.

use ratatui::style::Color;
use std::time::{Duration, Instant};

/// Lifetime of a toast when none is given
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Toast kind - determines style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    fn style(self) -> ToastStyle {
        match self {
            ToastKind::Info => ToastStyle {
                fg: Color::White,
                bg: Color::Blue,
                border: Color::LightBlue,
            },
            ToastKind::Success => ToastStyle {
                fg: Color::Black,
                bg: Color::Green,
                border: Color::LightGreen,
            },
            ToastKind::Warning => ToastStyle {
                fg: Color::Black,
                bg: Color::Yellow,
                border: Color::Yellow,
            },
            ToastKind::Error => ToastStyle {
                fg: Color::White,
                bg: Color::Red,
                border: Color::LightRed,
            },
        }
    }
}

/// Style configuration for a toast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastStyle {
    pub fg: Color,
    pub bg: Color,
    pub border: Color,
}

/// A single toast with message, timing, and style
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub style: ToastStyle,
    pub created_at: Instant,
    pub duration: Option<Duration>, // None = sticky
}

impl Toast {
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.duration {
            Some(d) => now.saturating_duration_since(self.created_at) >= d,
            None => false,
        }
    }
}

/// Toast manager for the application
#[derive(Debug, Default)]
pub struct NotificationState {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show an info toast with the default lifetime
    pub fn show(&mut self, message: &str) -> u64 {
        self.show_with_type(message, ToastKind::Info)
    }

    pub fn show_with_type(&mut self, message: &str, kind: ToastKind) -> u64 {
        self.show_with_duration(message, kind, Some(DEFAULT_TOAST_DURATION))
    }

    /// Show a toast with an explicit lifetime; `None` keeps it until closed
    pub fn show_with_duration(
        &mut self,
        message: &str,
        kind: ToastKind,
        duration: Option<Duration>,
    ) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            message: message.to_string(),
            kind,
            style: kind.style(),
            created_at: Instant::now(),
            duration,
        });
        id
    }

    pub fn show_success(&mut self, message: &str) -> u64 {
        self.show_with_type(message, ToastKind::Success)
    }

    /// Warnings stay up longer than the default
    pub fn show_warning(&mut self, message: &str) -> u64 {
        self.show_with_duration(message, ToastKind::Warning, Some(Duration::from_secs(10)))
    }

    /// Errors stay until closed
    pub fn show_error(&mut self, message: &str) -> u64 {
        self.show_with_duration(message, ToastKind::Error, None)
    }

    /// Close one toast. Returns whether it was still visible.
    pub fn close(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Close every toast at once
    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    /// Drop expired toasts, returns true if any were removed
    pub fn prune_expired(&mut self) -> bool {
        self.prune_expired_at(Instant::now())
    }

    pub fn prune_expired_at(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.is_expired_at(now));
        self.toasts.len() != before
    }

    /// Visible toasts, oldest first
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    #[cfg(test)]
    pub fn messages(&self) -> Vec<&str> {
        self.toasts.iter().map(|t| t.message.as_str()).collect()
    }
}

#[cfg(test)]
#[path = "notification_state_tests.rs"]
mod notification_state_tests;
