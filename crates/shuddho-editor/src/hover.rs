//! Hover/Popover controller.
//!
//! A state machine over one variable: the currently active flagged span.
//! Leaving a span arms a dismiss with a grace delay so the pointer can
//! travel from the span into the popover; re-entering either one before the
//! delay fires cancels the dismissal. A generation counter keyed into
//! [`DismissToken`] guarantees at most one pending dismissal at a time and
//! makes a cancelled timer's late firing a no-op.

use std::time::Duration;

use shuddho_core::{ActiveCorrection, Correction, PopoverPosition};

/// Handle for a pending dismissal. Firing it only takes effect while it is
/// still the current pending generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissToken(u64);

/// Tracks which flagged span is active and the pending-dismiss generation.
#[derive(Debug)]
pub struct HoverController {
    active: Option<ActiveCorrection>,
    generation: u64,
    pending: Option<u64>,
    dismiss_delay: Duration,
}

impl Default for HoverController {
    fn default() -> Self {
        Self::new(Duration::from_millis(200))
    }
}

impl HoverController {
    /// Create a controller with the given dismiss grace delay.
    pub fn new(dismiss_delay: Duration) -> Self {
        Self {
            active: None,
            generation: 0,
            pending: None,
            dismiss_delay,
        }
    }

    /// The currently active span, if a popover is open.
    pub fn active(&self) -> Option<&ActiveCorrection> {
        self.active.as_ref()
    }

    /// The configured grace delay.
    pub fn dismiss_delay(&self) -> Duration {
        self.dismiss_delay
    }

    /// Pointer entered a flagged span: cancel any pending dismiss and make
    /// this span active.
    pub fn pointer_enter(
        &mut self,
        correction: Correction,
        index: usize,
        position: PopoverPosition,
    ) {
        self.pending = None;
        self.active = Some(ActiveCorrection {
            correction,
            index,
            position,
        });
    }

    /// Pointer entered the popover itself: cancel the same pending dismiss.
    pub fn popover_enter(&mut self) {
        self.pending = None;
    }

    /// Pointer left the span or popover: arm a dismissal and return its
    /// token. Any previously armed dismissal is superseded.
    ///
    /// The caller owns the timing: sleep [`dismiss_delay`](Self::dismiss_delay),
    /// then call [`fire_dismiss`](Self::fire_dismiss) with the token. The
    /// controller must stay free to handle pointer events during the wait;
    /// holding a borrow of it across the sleep would make the cancellation
    /// path unreachable.
    pub fn pointer_leave(&mut self) -> DismissToken {
        self.generation += 1;
        self.pending = Some(self.generation);
        DismissToken(self.generation)
    }

    /// Fire an armed dismissal. Returns `true` if the popover was closed;
    /// a stale or cancelled token is a no-op.
    pub fn fire_dismiss(&mut self, token: DismissToken) -> bool {
        if self.pending == Some(token.0) {
            self.pending = None;
            self.active = None;
            true
        } else {
            false
        }
    }

    /// Close the popover unconditionally (accept, ignore, add-to-dictionary,
    /// fix-all). Cancels any pending dismissal.
    pub fn dismiss(&mut self) {
        self.pending = None;
        self.active = None;
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn correction() -> Correction {
        Correction::new("ভালো", "ভাল", "বানান ভুল")
    }

    fn enter(controller: &mut HoverController) {
        controller.pointer_enter(correction(), 0, PopoverPosition { top: 20.0, left: 4.0 });
    }

    #[test]
    fn test_initial_state_is_none() {
        let controller = HoverController::default();
        assert!(controller.active().is_none());
        assert_eq!(controller.dismiss_delay(), Duration::from_millis(200));
    }

    #[test]
    fn test_pointer_enter_activates_span() {
        let mut controller = HoverController::default();
        enter(&mut controller);

        let active = controller.active().unwrap();
        assert_eq!(active.correction.incorrect, "ভালো");
        assert_eq!(active.index, 0);
        assert_eq!(active.position.top, 20.0);
    }

    #[test]
    fn test_leave_then_fire_dismisses() {
        let mut controller = HoverController::default();
        enter(&mut controller);
        let token = controller.pointer_leave();

        assert!(controller.fire_dismiss(token));
        assert!(controller.active().is_none());
    }

    #[test]
    fn test_reenter_span_cancels_pending_dismiss() {
        let mut controller = HoverController::default();
        enter(&mut controller);
        let token = controller.pointer_leave();
        enter(&mut controller);

        assert!(!controller.fire_dismiss(token));
        assert!(controller.active().is_some());
    }

    #[test]
    fn test_popover_enter_cancels_pending_dismiss() {
        let mut controller = HoverController::default();
        enter(&mut controller);
        let token = controller.pointer_leave();
        controller.popover_enter();

        assert!(!controller.fire_dismiss(token));
        assert!(controller.active().is_some());
    }

    #[test]
    fn test_at_most_one_pending_dismissal() {
        let mut controller = HoverController::default();
        enter(&mut controller);
        let first = controller.pointer_leave();
        controller.popover_enter();
        let second = controller.pointer_leave();

        // The superseded token no longer fires; the current one does.
        assert!(!controller.fire_dismiss(first));
        assert!(controller.active().is_some());
        assert!(controller.fire_dismiss(second));
        assert!(controller.active().is_none());
    }

    #[test]
    fn test_fired_token_cannot_fire_twice() {
        let mut controller = HoverController::default();
        enter(&mut controller);
        let token = controller.pointer_leave();
        assert!(controller.fire_dismiss(token));
        assert!(!controller.fire_dismiss(token));
    }

    #[test]
    fn test_unconditional_dismiss() {
        let mut controller = HoverController::default();
        enter(&mut controller);
        let token = controller.pointer_leave();
        controller.dismiss();

        assert!(controller.active().is_none());
        assert!(!controller.fire_dismiss(token));
    }

    #[tokio::test(start_paused = true)]
    async fn test_caller_driven_delay_then_fire() {
        let mut controller = HoverController::new(Duration::from_millis(200));
        enter(&mut controller);
        let token = controller.pointer_leave();

        tokio::time::sleep(controller.dismiss_delay()).await;
        assert!(controller.fire_dismiss(token));
        assert!(controller.active().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reenter_during_grace_delay_cancels() {
        let mut controller = HoverController::new(Duration::from_millis(200));
        enter(&mut controller);
        let token = controller.pointer_leave();

        // The controller stays usable while the delay runs, so a pointer
        // event mid-wait can cancel the armed dismissal.
        tokio::time::sleep(controller.dismiss_delay() / 2).await;
        controller.popover_enter();
        tokio::time::sleep(controller.dismiss_delay()).await;

        assert!(!controller.fire_dismiss(token));
        assert!(controller.active().is_some());
    }

    #[test]
    fn test_hovering_new_span_replaces_active() {
        let mut controller = HoverController::default();
        enter(&mut controller);
        controller.pointer_enter(
            Correction::new("কি", "কী", ""),
            3,
            PopoverPosition::default(),
        );

        let active = controller.active().unwrap();
        assert_eq!(active.correction.incorrect, "কি");
        assert_eq!(active.index, 3);
    }
}
