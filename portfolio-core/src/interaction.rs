//! One-shot subscriptions for page-level events.

/// Lifecycle of a subscription that fires at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OneShot {
    /// Not subscribed yet; events are ignored.
    #[default]
    Unarmed,
    /// Subscribed; the next event is delivered.
    Armed,
    /// Delivered; further events are ignored forever.
    Consumed,
}

impl OneShot {
    /// Subscribe. Arming twice, or after consumption, changes nothing.
    pub fn arm(&mut self) {
        if *self == OneShot::Unarmed {
            *self = OneShot::Armed;
        }
    }

    /// Offer an event. Returns `true` only for the first event after arming.
    pub fn consume(&mut self) -> bool {
        if *self == OneShot::Armed {
            *self = OneShot::Consumed;
            true
        } else {
            false
        }
    }

    pub fn is_armed(&self) -> bool {
        *self == OneShot::Armed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignores_events_before_arming() {
        let mut once = OneShot::default();
        assert!(!once.consume());
        assert_eq!(once, OneShot::Unarmed);
    }

    #[test]
    fn test_fires_exactly_once() {
        let mut once = OneShot::default();
        once.arm();
        assert!(once.is_armed());

        let fired = (0..5).filter(|_| once.consume()).count();
        assert_eq!(fired, 1);
    }

    #[test]
    fn test_rearm_after_consume_is_noop() {
        let mut once = OneShot::default();
        once.arm();
        assert!(once.consume());

        once.arm();
        assert!(!once.consume());
    }
}
