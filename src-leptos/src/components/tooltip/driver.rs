//! Executes `HoverState` commands against a gloo timer and the visibility signal.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use lumen_types::{HoverCommand, HoverState};

/// Owns one tooltip's hover state and its single timer slot.
///
/// Every handle inside is arena-backed, so the driver is `Copy` and can be
/// moved into event handlers and cleanup closures freely.
#[derive(Clone, Copy)]
pub(crate) struct HoverDriver {
    state: StoredValue<HoverState>,
    timer: StoredValue<Option<Timeout>, LocalStorage>,
    visible: RwSignal<bool>,
}

impl HoverDriver {
    pub(crate) fn new(delay_ms: u32, visible: RwSignal<bool>) -> Self {
        Self {
            state: StoredValue::new(HoverState::new(delay_ms)),
            timer: StoredValue::new_local(None),
            visible,
        }
    }

    /// Apply one transition and carry out whatever it asks for.
    pub(crate) fn dispatch(self, step: impl FnOnce(&mut HoverState) -> HoverCommand) {
        if let Some(command) = self.state.try_update_value(step) {
            self.run(command);
        }
    }

    fn run(self, command: HoverCommand) {
        match command {
            HoverCommand::Idle => {}
            HoverCommand::Arm { ticket, delay_ms } => {
                log::trace!("tooltip armed for {delay_ms}ms");
                let timeout =
                    Timeout::new(delay_ms, move || self.dispatch(|state| state.timer_fired(ticket)));
                // Replacing the slot drops, and so cancels, the previous timeout.
                self.timer.update_value(|slot| *slot = Some(timeout));
            }
            HoverCommand::Show => {
                log::trace!("tooltip shown");
                self.visible.set(true);
            }
            HoverCommand::Hide => {
                self.timer.update_value(|slot| drop(slot.take()));
                self.visible.set(false);
            }
        }
    }

    /// Unmount path: the signals may already be gone, so only the timer
    /// and the state are touched.
    pub(crate) fn teardown(self) {
        self.state.try_update_value(HoverState::teardown);
        self.timer.try_update_value(|slot| drop(slot.take()));
    }
}
