//! Lifecycle notifications for UI chrome.
//!
//! The controller is handed a [`LifecycleHooks`] implementation at
//! construction and calls exactly one hook per transition.

use std::sync::mpsc::Sender;

/// A lifecycle transition, as carried over a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    GameOver { final_score: u32 },
    Paused,
    Resumed,
}

/// Receives lifecycle transitions. All hooks default to no-ops.
pub trait LifecycleHooks {
    fn on_game_over(&mut self, _final_score: u32) {}

    fn on_pause(&mut self) {}

    /// Fired only when leaving pause through an explicit resume.
    fn on_resume(&mut self) {}
}

/// Hooks that ignore every transition.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

impl LifecycleHooks for NoHooks {}

/// Forwards transitions into a channel. A closed receiver is ignored.
impl LifecycleHooks for Sender<LifecycleEvent> {
    fn on_game_over(&mut self, final_score: u32) {
        let _ = self.send(LifecycleEvent::GameOver { final_score });
    }

    fn on_pause(&mut self) {
        let _ = self.send(LifecycleEvent::Paused);
    }

    fn on_resume(&mut self) {
        let _ = self.send(LifecycleEvent::Resumed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn sender_forwards_events() {
        let (mut tx, rx) = mpsc::channel::<LifecycleEvent>();
        tx.on_pause();
        tx.on_resume();
        tx.on_game_over(1200);

        let events: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            events,
            vec![
                LifecycleEvent::Paused,
                LifecycleEvent::Resumed,
                LifecycleEvent::GameOver { final_score: 1200 },
            ]
        );
    }

    #[test]
    fn sender_ignores_dropped_receiver() {
        let (mut tx, rx) = mpsc::channel::<LifecycleEvent>();
        drop(rx);
        tx.on_game_over(0);
    }
}
