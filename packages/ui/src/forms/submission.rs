//! Double-submit guard.
//!
//! Disabling the submit button is advisory; this is the hard block. A second
//! attempt while a submission is in flight is rejected outright (not queued),
//! so a rapid double click produces exactly one request.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Submission {
    in_flight: bool,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to start a submission. Returns false — and changes nothing — when
    /// one is already in flight.
    #[must_use]
    pub fn begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_begin_while_in_flight_is_rejected() {
        let mut submission = Submission::new();
        assert!(submission.begin());
        assert!(!submission.begin(), "double click must not start a second request");
        assert!(submission.in_flight());

        submission.finish();
        assert!(submission.begin(), "a new submission may start after the first completes");
    }
}
