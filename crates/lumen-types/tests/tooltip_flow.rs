#![allow(unused_crate_dependencies)]
#![allow(clippy::tests_outside_test_module, reason = "integration tests live in tests/ dir")]
#![allow(clippy::expect_used, reason = "integration test, panics are the assertion mechanism")]

//! Drives full hover sessions the way the Leptos component does: commands
//! from `HoverState` go into a single timer slot, a fake clock fires it, and
//! `locate` runs whenever the overlay becomes visible, the placement changes
//! while visible, or the viewport changes while visible.

use lumen_types::{
    locate, HoverCommand, HoverState, LayoutSource, MeasureError, Placement, Position, Rect, Size,
    TimerTicket, TooltipOptions,
};

struct FakeLayout {
    target: Rect,
    overlay: Option<Size>,
    viewport: Size,
}

impl LayoutSource for FakeLayout {
    fn target_rect(&self) -> Result<Rect, MeasureError> {
        Ok(self.target)
    }

    fn overlay_rect(&self) -> Result<Rect, MeasureError> {
        self.overlay
            .map(|size| Rect::new(0.0, 0.0, size.width, size.height))
            .ok_or_else(|| MeasureError::not_mounted("overlay"))
    }

    fn viewport(&self) -> Result<Size, MeasureError> {
        Ok(self.viewport)
    }
}

/// Host side of one tooltip instance.
struct Harness {
    options: TooltipOptions,
    state: HoverState,
    now_ms: u64,
    /// At most one armed timer: (ticket, deadline).
    slot: Option<(TimerTicket, u64)>,
    armed_total: usize,
    visible: bool,
    position: Position,
    layout: FakeLayout,
}

impl Harness {
    fn new(options: TooltipOptions, layout: FakeLayout) -> Self {
        let mut state = HoverState::new(options.delay_ms);
        state.set_disabled(options.disabled);
        Self {
            options,
            state,
            now_ms: 0,
            slot: None,
            armed_total: 0,
            visible: false,
            position: Position::default(),
            layout,
        }
    }

    fn run(&mut self, command: HoverCommand) {
        match command {
            HoverCommand::Idle => {}
            HoverCommand::Arm { ticket, delay_ms } => {
                self.slot = Some((ticket, self.now_ms + u64::from(delay_ms)));
                self.armed_total += 1;
            }
            HoverCommand::Show => {
                self.visible = true;
                self.reposition();
            }
            HoverCommand::Hide => {
                self.slot = None;
                self.visible = false;
            }
        }
    }

    fn reposition(&mut self) {
        if let Ok(position) = locate(&self.layout, self.options.placement, self.options.arrow) {
            self.position = position;
        }
    }

    fn set_placement(&mut self, placement: Placement) {
        self.options.placement = placement;
        if self.visible {
            self.reposition();
        }
    }

    /// Window resize or scroll.
    fn set_viewport(&mut self, viewport: Size) {
        self.layout.viewport = viewport;
        if self.visible {
            self.reposition();
        }
    }

    fn enter(&mut self) {
        let command = self.state.hover_enter();
        self.run(command);
    }

    fn leave(&mut self) {
        let command = self.state.hover_leave();
        self.run(command);
    }

    fn advance(&mut self, ms: u64) {
        self.now_ms += ms;
        if let Some((ticket, deadline)) = self.slot {
            if deadline <= self.now_ms {
                self.slot = None;
                let command = self.state.timer_fired(ticket);
                self.run(command);
            }
        }
    }
}

fn layout() -> FakeLayout {
    FakeLayout {
        target: Rect::new(100.0, 50.0, 100.0, 20.0),
        overlay: Some(Size::new(80.0, 30.0)),
        viewport: Size::new(1024.0, 768.0),
    }
}

#[test]
fn test_hover_shows_after_delay_at_expected_position() {
    let mut harness = Harness::new(TooltipOptions::default(), layout());
    harness.enter();
    harness.advance(199);
    assert!(!harness.visible);
    harness.advance(1);
    assert!(harness.visible);
    assert_eq!(harness.position, Position { top: 56.0, left: 60.0 });
}

#[test]
fn test_leave_before_delay_never_shows() {
    for elapsed in [0, 1, 100, 199] {
        let mut harness = Harness::new(TooltipOptions::default(), layout());
        harness.enter();
        harness.advance(elapsed);
        harness.leave();
        harness.advance(10_000);
        assert!(!harness.visible, "visible after leaving at {elapsed}ms");
    }
}

#[test]
fn test_reentering_keeps_a_single_timer() {
    let mut harness = Harness::new(TooltipOptions::default(), layout());
    harness.enter();
    harness.advance(150);
    harness.enter();
    harness.advance(150);
    assert!(!harness.visible, "first timer must have been replaced");
    harness.advance(50);
    assert!(harness.visible);
    assert_eq!(harness.armed_total, 2);
    assert!(harness.slot.is_none());
}

#[test]
fn test_disabled_never_renders() {
    let options = TooltipOptions { disabled: true, ..Default::default() };
    let mut harness = Harness::new(options, layout());
    for _ in 0..5 {
        harness.enter();
        harness.advance(1_000);
        harness.leave();
    }
    assert!(!harness.visible);
    assert_eq!(harness.armed_total, 0);
}

#[test]
fn test_repeated_enter_while_visible_keeps_position() {
    let mut harness = Harness::new(TooltipOptions::default(), layout());
    harness.enter();
    harness.advance(200);
    let shown_at = harness.position;
    harness.enter();
    harness.enter();
    harness.advance(1_000);
    assert!(harness.visible);
    assert_eq!(harness.position, shown_at);
    assert_eq!(harness.armed_total, 1);
}

#[test]
fn test_unmeasurable_overlay_keeps_default_position() {
    let mut harness = Harness::new(
        TooltipOptions { placement: Placement::Right, ..Default::default() },
        FakeLayout { overlay: None, ..layout() },
    );
    harness.enter();
    harness.advance(200);
    assert!(harness.visible);
    assert_eq!(harness.position, Position::default());
}

#[test]
fn test_options_from_json_drive_the_session() {
    let options = TooltipOptions::from_json(r#"{"placement":"bottom","delay":0,"arrow":false}"#)
        .expect("valid options");
    let mut harness = Harness::new(options, layout());
    harness.enter();
    harness.advance(0);
    assert!(harness.visible);
    assert_eq!(harness.position, Position { top: 128.0, left: 60.0 });
}

#[test]
fn test_placement_change_while_visible_moves_overlay() {
    let mut harness = Harness::new(TooltipOptions::default(), layout());
    harness.enter();
    harness.advance(200);
    assert_eq!(harness.position, Position { top: 56.0, left: 60.0 });

    harness.set_placement(Placement::Right);
    // top = 100 + (20 - 30) / 2, left = 50 + 100 + 8 + 6
    assert_eq!(harness.position, Position { top: 95.0, left: 164.0 });
}

#[test]
fn test_placement_change_while_hidden_waits_for_show() {
    let mut harness = Harness::new(TooltipOptions::default(), layout());
    harness.set_placement(Placement::Bottom);
    assert_eq!(harness.position, Position::default());

    harness.enter();
    harness.advance(200);
    assert_eq!(harness.position, Position { top: 134.0, left: 60.0 });
}

#[test]
fn test_viewport_shrink_while_visible_reclamps() {
    let mut harness = Harness::new(TooltipOptions::default(), layout());
    harness.enter();
    harness.advance(200);
    assert_eq!(harness.position.left, 60.0);

    let narrow = Size::new(100.0, 768.0);
    harness.set_viewport(narrow);
    assert!(harness.position.left + 80.0 <= narrow.width - 8.0);
    assert_eq!(harness.position.left, 12.0);
    assert_eq!(harness.position.top, 56.0);
}

#[test]
fn test_viewport_change_while_hidden_keeps_position() {
    let mut harness = Harness::new(TooltipOptions::default(), layout());
    harness.enter();
    harness.advance(200);
    harness.leave();
    let last = harness.position;

    harness.set_viewport(Size::new(100.0, 100.0));
    assert_eq!(harness.position, last);
}
