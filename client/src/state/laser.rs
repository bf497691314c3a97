//! Laser session state for the producer surface.
//!
//! The active flag is an explicit value object with a single transition
//! method, not a loose boolean mutated from UI callbacks. `set_active`
//! returns the channel side effects the transition requires, in order, so
//! the component layer runs them and this state stays pure and testable.

#[cfg(test)]
#[path = "laser_test.rs"]
mod laser_test;

/// A side effect required by a session transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEffect {
    /// Empty the local trail buffer immediately.
    ClearLocalTrail,
    /// Notify the channel's activation flag.
    NotifyActive(bool),
    /// Empty the server-side point set.
    ClearChannel,
}

/// Whether the presenter's laser is live (points are drawn *and* published).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LaserSession {
    active: bool,
}

impl LaserSession {
    #[must_use]
    pub fn is_active(self) -> bool {
        self.active
    }

    /// Transition the session.
    ///
    /// Activating notifies the channel flag. Deactivating clears the local
    /// trail, notifies the flag, and clears the channel — consumers use the
    /// flag to tell "no session" from "stroke fully decayed". A no-op
    /// transition produces no effects.
    pub fn set_active(&mut self, active: bool) -> Vec<SessionEffect> {
        if self.active == active {
            return Vec::new();
        }
        self.active = active;
        if active {
            vec![SessionEffect::NotifyActive(true)]
        } else {
            vec![
                SessionEffect::ClearLocalTrail,
                SessionEffect::NotifyActive(false),
                SessionEffect::ClearChannel,
            ]
        }
    }
}
