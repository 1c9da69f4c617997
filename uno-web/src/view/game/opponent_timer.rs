use std::time::Duration;

/// Holds the handle of the pending opponent turn.
///
/// Each arming gets a fresh ticket, and only a firing that carries the current
/// ticket is accepted. Cancelling drops the handle and retires the ticket, so a
/// callback that slips through after teardown or restart resolves nothing.
pub struct OpponentTimer<H> {
    handle: Option<H>,
    ticket: u64,
}

impl<H> OpponentTimer<H> {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            handle: None,
            ticket: 0,
        }
    }

    /// Replaces any pending turn with the handle built by `start`.
    pub fn arm(&mut self, start: impl FnOnce(u64) -> H) {
        self.ticket += 1;
        self.handle = Some(start(self.ticket));
    }

    /// Returns whether a turn was pending.
    pub fn cancel(&mut self) -> bool {
        self.ticket += 1;
        self.handle.take().is_some()
    }

    /// Accepts the firing of `ticket` if it is the pending one.
    pub fn fire(&mut self, ticket: u64) -> bool {
        if ticket != self.ticket || self.handle.is_none() {
            return false;
        }
        self.handle = None;
        true
    }
}

/// Milliseconds as the browser timer takes them, saturating on overflow.
pub fn timer_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}
