// ============================================================================
// REQUEST SEQUENCER - Drops stale responses
// ============================================================================
// One sequencer per fetch channel. Only the response carrying the latest
// token may touch state; closing the sequencer (unmount) rejects everything.
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: u64,
    closed: bool,
}

impl RequestSequencer {
    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        !self.closed && token.0 == self.latest
    }

    /// For fire-once requests (submit, delete) that only care about unmount.
    pub fn is_open(&self) -> bool {
        !self.closed
    }

    pub fn close(&mut self) {
        self.closed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_token_is_current() {
        let mut seq = RequestSequencer::default();
        let first = seq.issue();
        let second = seq.issue();

        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn closing_rejects_everything() {
        let mut seq = RequestSequencer::default();
        let token = seq.issue();
        seq.close();

        assert!(!seq.is_current(token));
        assert!(!seq.is_open());
    }
}
