//! Transient toast notifications.
//!
//! A toast slides in shortly after it is pushed, stays for a while, slides
//! out and is removed. The phase drives the CSS class; the timers that move
//! toasts between phases live in `components::toast_host`.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use motion::consts::{TOAST_EXIT_MS, TOAST_SHOW_DELAY_MS, TOAST_VISIBLE_MS};
use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastPhase {
    /// Inserted but still off screen.
    #[default]
    Entering,
    Shown,
    /// Sliding out; removed once the exit transition ends.
    Leaving,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub phase: ToastPhase,
}

impl Toast {
    /// CSS class list: `notification <kind>`, plus `show` while on screen.
    #[must_use]
    pub fn class(&self) -> String {
        match self.phase {
            ToastPhase::Shown => format!("notification {} show", self.kind.as_str()),
            ToastPhase::Entering | ToastPhase::Leaving => format!("notification {}", self.kind.as_str()),
        }
    }
}

/// Phase timings in milliseconds.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ToastTiming {
    pub show_delay_ms: u32,
    pub visible_ms: u32,
    pub exit_ms: u32,
}

impl Default for ToastTiming {
    fn default() -> Self {
        Self { show_delay_ms: TOAST_SHOW_DELAY_MS, visible_ms: TOAST_VISIBLE_MS, exit_ms: TOAST_EXIT_MS }
    }
}

/// Live toasts in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast in the entering phase and return its id.
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast { id, message: message.into(), kind, phase: ToastPhase::Entering });
        id
    }

    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Toast> {
        self.items.iter().find(|t| t.id == id)
    }

    pub fn show(&mut self, id: u64) {
        self.set_phase(id, ToastPhase::Shown);
    }

    pub fn dismiss(&mut self, id: u64) {
        self.set_phase(id, ToastPhase::Leaving);
    }

    /// Drop a toast. Unknown ids are ignored.
    pub fn remove(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    fn set_phase(&mut self, id: u64, phase: ToastPhase) {
        if let Some(toast) = self.items.iter_mut().find(|t| t.id == id) {
            toast.phase = phase;
        }
    }
}
