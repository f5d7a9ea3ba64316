// SPDX-License-Identifier: MPL-2.0
//! Explicit transition state for the lightbox overlay.
//!
//! Every delayed continuation (the open clear-delay, the fade swap-delay,
//! image decodes) is tagged with the generation it was scheduled under.
//! Guarded methods reject continuations whose generation no longer matches,
//! so rapid repeated navigation supersedes pending timers instead of
//! interleaving with them.

/// Where the overlay currently is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Overlay not visible.
    Closed,
    /// Overlay visible with a cleared frame, waiting the short set-source
    /// delay before `target` is applied.
    Opening { target: String },
    /// Source applied, waiting for the decoded image.
    Loading { src: String },
    /// Image on screen at full opacity.
    Visible { src: String },
    /// Fading out toward a swap to `target`.
    FadingOut { src: String, target: String },
}

/// Generation-guarded transition machine for one overlay instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    phase: Phase,
    generation: u64,
}

impl Default for Transition {
    fn default() -> Self {
        Self::new()
    }
}

impl Transition {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Closed,
            generation: 0,
        }
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the overlay is visible in any phase.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase != Phase::Closed
    }

    /// Starts opening the overlay toward `target`. The returned generation
    /// tags the clear-delay timer.
    pub fn begin_opening(&mut self, target: String) -> u64 {
        self.generation += 1;
        self.phase = Phase::Opening { target };
        self.generation
    }

    /// Applies the target source after the clear delay. Returns the source
    /// to load, or `None` when the timer is stale or the phase moved on.
    pub fn confirm_open(&mut self, generation: u64) -> Option<String> {
        if generation != self.generation {
            return None;
        }
        match &self.phase {
            Phase::Opening { target } => {
                let src = target.clone();
                self.phase = Phase::Loading { src: src.clone() };
                Some(src)
            }
            _ => None,
        }
    }

    /// Marks the pending image as decoded and on screen. Stale generations
    /// and mismatched sources are ignored.
    pub fn image_ready(&mut self, generation: u64, src: &str) -> bool {
        if generation != self.generation {
            return false;
        }
        match &self.phase {
            Phase::Loading { src: pending } if pending == src => {
                self.phase = Phase::Visible { src: src.to_string() };
                true
            }
            _ => false,
        }
    }

    /// Starts a fade transition toward `target`, superseding any pending
    /// timer. Returns the generation tagging the swap-delay timer, or `None`
    /// when the overlay is closed.
    pub fn begin_fade(&mut self, target: String) -> Option<u64> {
        let src = match &self.phase {
            Phase::Closed => return None,
            Phase::Visible { src } | Phase::Loading { src } => src.clone(),
            Phase::FadingOut { src, .. } => src.clone(),
            // Navigating before the clear delay fired: fade from nothing.
            Phase::Opening { .. } => String::new(),
        };

        self.generation += 1;
        self.phase = Phase::FadingOut { src, target };
        Some(self.generation)
    }

    /// Swaps the source once the fade delay has elapsed. Returns the source
    /// to load, or `None` when the timer is stale.
    pub fn complete_swap(&mut self, generation: u64) -> Option<String> {
        if generation != self.generation {
            return None;
        }
        match &self.phase {
            Phase::FadingOut { target, .. } => {
                let src = target.clone();
                self.phase = Phase::Loading { src: src.clone() };
                Some(src)
            }
            _ => None,
        }
    }

    /// Closes the overlay. Bumping the generation cancels every pending
    /// continuation.
    pub fn close(&mut self) {
        self.generation += 1;
        self.phase = Phase::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let transition = Transition::new();
        assert_eq!(*transition.phase(), Phase::Closed);
        assert!(!transition.is_open());
    }

    #[test]
    fn open_cycle_reaches_visible() {
        let mut transition = Transition::new();
        let generation = transition.begin_opening("a.jpg".to_string());
        assert!(transition.is_open());

        let src = transition.confirm_open(generation).expect("fresh timer");
        assert_eq!(src, "a.jpg");

        assert!(transition.image_ready(generation, "a.jpg"));
        assert_eq!(
            *transition.phase(),
            Phase::Visible {
                src: "a.jpg".to_string()
            }
        );
    }

    #[test]
    fn stale_clear_delay_is_discarded() {
        let mut transition = Transition::new();
        let first = transition.begin_opening("a.jpg".to_string());
        // A second open supersedes the first before its timer fires
        let second = transition.begin_opening("b.jpg".to_string());

        assert_eq!(transition.confirm_open(first), None);
        assert_eq!(transition.confirm_open(second), Some("b.jpg".to_string()));
    }

    #[test]
    fn fade_swaps_to_target() {
        let mut transition = Transition::new();
        let generation = transition.begin_opening("a.jpg".to_string());
        transition.confirm_open(generation);
        transition.image_ready(generation, "a.jpg");

        let fade = transition.begin_fade("b.jpg".to_string()).expect("open");
        assert_eq!(
            *transition.phase(),
            Phase::FadingOut {
                src: "a.jpg".to_string(),
                target: "b.jpg".to_string()
            }
        );

        assert_eq!(transition.complete_swap(fade), Some("b.jpg".to_string()));
        assert!(transition.image_ready(fade, "b.jpg"));
    }

    #[test]
    fn rapid_navigation_supersedes_pending_swap() {
        let mut transition = Transition::new();
        let generation = transition.begin_opening("a.jpg".to_string());
        transition.confirm_open(generation);
        transition.image_ready(generation, "a.jpg");

        let first_fade = transition.begin_fade("b.jpg".to_string()).expect("open");
        let second_fade = transition.begin_fade("c.jpg".to_string()).expect("open");

        // The first timer lands late and is ignored; only the second swaps.
        assert_eq!(transition.complete_swap(first_fade), None);
        assert_eq!(
            transition.complete_swap(second_fade),
            Some("c.jpg".to_string())
        );
    }

    #[test]
    fn fade_is_noop_when_closed() {
        let mut transition = Transition::new();
        assert_eq!(transition.begin_fade("a.jpg".to_string()), None);
    }

    #[test]
    fn close_cancels_pending_timers() {
        let mut transition = Transition::new();
        let generation = transition.begin_opening("a.jpg".to_string());
        transition.close();

        assert!(!transition.is_open());
        assert_eq!(transition.confirm_open(generation), None);
    }

    #[test]
    fn image_ready_rejects_mismatched_source() {
        let mut transition = Transition::new();
        let generation = transition.begin_opening("a.jpg".to_string());
        transition.confirm_open(generation);

        assert!(!transition.image_ready(generation, "z.jpg"));
        assert!(transition.image_ready(generation, "a.jpg"));
    }

    #[test]
    fn navigation_during_load_fades_from_pending_frame() {
        let mut transition = Transition::new();
        let generation = transition.begin_opening("a.jpg".to_string());
        transition.confirm_open(generation);

        // Still loading "a.jpg" when the user navigates on
        let fade = transition.begin_fade("b.jpg".to_string()).expect("open");
        assert_eq!(transition.complete_swap(fade), Some("b.jpg".to_string()));

        // The superseded decode of "a.jpg" arrives late and is ignored
        assert!(!transition.image_ready(generation, "a.jpg"));
    }
}
