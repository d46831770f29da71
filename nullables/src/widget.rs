//! Nullable challenge widget — scripted signal sequence.

use intake_types::VerificationToken;
use intake_verification::ChallengeSignal;
use std::cell::RefCell;
use std::collections::VecDeque;

/// A test stand-in for the challenge widget.
///
/// Signals are enqueued by the test and drained by whatever drives the
/// workflow, in order. The real widget pushes the same three signals
/// asynchronously; draining the queue at chosen points reproduces any
/// interleaving deterministically.
pub struct NullChallengeWidget {
    inbox: RefCell<VecDeque<ChallengeSignal>>,
}

impl NullChallengeWidget {
    pub fn new() -> Self {
        Self {
            inbox: RefCell::new(VecDeque::new()),
        }
    }

    /// Queue a `verified(token)` signal.
    pub fn solve(&self, token: &str) {
        self.enqueue(ChallengeSignal::Verified(VerificationToken::new(token)));
    }

    /// Queue an arbitrary signal.
    pub fn enqueue(&self, signal: ChallengeSignal) {
        self.inbox.borrow_mut().push_back(signal);
    }

    /// The next pending signal, if any.
    pub fn next_signal(&self) -> Option<ChallengeSignal> {
        self.inbox.borrow_mut().pop_front()
    }
}

impl Default for NullChallengeWidget {
    fn default() -> Self {
        Self::new()
    }
}
