//! Hover/delay state machine for the tooltip.
//!
//! ```text
//!   Hidden ──enter──▶ Pending(ticket) ──timer(ticket)──▶ Visible
//!     ▲                   │                                │
//!     └──────leave────────┴──────────────leave─────────────┘
//! ```
//!
//! The state only decides; the host executes the returned [`HoverCommand`]
//! (arm or drop a timer, flip the visibility signal). Each armed timer gets a
//! fresh [`TimerTicket`] and a firing timer is honoured only if its ticket is
//! still the pending one, so at most one timer can ever take effect.

use crate::models::DEFAULT_DELAY_MS;

/// Generation number of one armed show-timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverPhase {
    /// No timer, no overlay
    Hidden,
    /// Show-timer armed with this ticket
    Pending(TimerTicket),
    /// Overlay rendered
    Visible,
}

/// What the host has to do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverCommand {
    /// Nothing changes.
    Idle,
    /// Drop any armed timer, then arm one for `delay_ms` carrying `ticket`.
    Arm { ticket: TimerTicket, delay_ms: u32 },
    /// Render the overlay.
    Show,
    /// Drop any armed timer and unmount the overlay.
    Hide,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverState {
    phase: HoverPhase,
    delay_ms: u32,
    disabled: bool,
    next_ticket: u64,
}

impl Default for HoverState {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY_MS)
    }
}

impl HoverState {
    pub fn new(delay_ms: u32) -> Self {
        Self { phase: HoverPhase::Hidden, delay_ms, disabled: false, next_ticket: 0 }
    }

    /// Current phase
    pub fn phase(&self) -> HoverPhase {
        self.phase
    }

    /// Whether the overlay is rendered
    pub fn is_visible(&self) -> bool {
        self.phase == HoverPhase::Visible
    }

    /// Takes effect from the next hover-enter.
    pub fn set_delay(&mut self, delay_ms: u32) {
        self.delay_ms = delay_ms;
    }

    /// Arms a fresh timer unless disabled or already visible.
    pub fn hover_enter(&mut self) -> HoverCommand {
        if self.disabled {
            return HoverCommand::Idle;
        }
        match self.phase {
            HoverPhase::Visible => HoverCommand::Idle,
            // Re-entering while pending replaces the timer.
            HoverPhase::Hidden | HoverPhase::Pending(_) => {
                let ticket = TimerTicket(self.next_ticket);
                self.next_ticket = self.next_ticket.wrapping_add(1);
                self.phase = HoverPhase::Pending(ticket);
                HoverCommand::Arm { ticket, delay_ms: self.delay_ms }
            }
        }
    }

    /// Always answers `Hide` so the host clears its timer slot even when
    /// the state was already hidden.
    pub fn hover_leave(&mut self) -> HoverCommand {
        self.phase = HoverPhase::Hidden;
        HoverCommand::Hide
    }

    /// Honoured only for the ticket that is still pending.
    pub fn timer_fired(&mut self, ticket: TimerTicket) -> HoverCommand {
        match self.phase {
            HoverPhase::Pending(pending) if pending == ticket && !self.disabled => {
                self.phase = HoverPhase::Visible;
                HoverCommand::Show
            }
            _ => HoverCommand::Idle,
        }
    }

    pub fn set_disabled(&mut self, disabled: bool) -> HoverCommand {
        self.disabled = disabled;
        if disabled && self.phase != HoverPhase::Hidden {
            self.phase = HoverPhase::Hidden;
            return HoverCommand::Hide;
        }
        HoverCommand::Idle
    }

    /// Unmount: forget everything pending.
    pub fn teardown(&mut self) -> HoverCommand {
        self.hover_leave()
    }
}
