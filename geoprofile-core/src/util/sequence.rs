use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies a request within a [`RequestSequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub const fn to_raw(self) -> u64 {
        self.0
    }
}

/// Latest-wins sequencing of concurrent requests.
///
/// Each request draws a new generation before it starts.
/// When it completes, its response is only used if no
/// other request has been started in the meantime.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: AtomicU64,
}

impl RequestSequence {
    pub fn next(&self) -> Generation {
        Generation(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn latest(&self) -> Generation {
        Generation(self.latest.load(Ordering::SeqCst))
    }

    pub fn is_latest(&self, generation: Generation) -> bool {
        self.latest() == generation
    }

    /// Returns `None` for a stale response.
    pub fn settle<T>(&self, generation: Generation, response: T) -> Option<T> {
        if self.is_latest(generation) {
            Some(response)
        } else {
            log::debug!(
                "Discarding stale response #{} (latest: #{})",
                generation.to_raw(),
                self.latest().to_raw()
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increasing_generations() {
        let seq = RequestSequence::default();
        let first = seq.next();
        let second = seq.next();
        assert!(first < second);
        assert_eq!(second, seq.latest());
    }

    #[test]
    fn latest_response_wins() {
        let seq = RequestSequence::default();
        let slow = seq.next();
        let fast = seq.next();
        assert_eq!(Some("fast"), seq.settle(fast, "fast"));
        assert_eq!(None, seq.settle(slow, "slow"));
    }

    #[test]
    fn single_request_is_never_stale() {
        let seq = RequestSequence::default();
        let g = seq.next();
        assert!(seq.is_latest(g));
        assert_eq!(Some(1), seq.settle(g, 1));
    }
}
