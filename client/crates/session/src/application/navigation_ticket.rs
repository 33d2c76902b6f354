//! Navigation Tickets
//!
//! Every navigation attempt gets a ticket. Issuing a new ticket supersedes
//! all earlier ones; a superseded attempt must not be decided.

use tokio::sync::watch;

#[derive(Debug)]
pub struct NavigationSequencer {
    latest: watch::Sender<u64>,
}

impl Default for NavigationSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationSequencer {
    pub fn new() -> Self {
        Self {
            latest: watch::Sender::new(0),
        }
    }

    /// Issue a ticket for a new attempt
    pub fn issue(&self) -> NavigationTicket {
        let mut generation = 0;
        self.latest.send_modify(|latest| {
            *latest += 1;
            generation = *latest;
        });
        NavigationTicket {
            generation,
            latest: self.latest.subscribe(),
        }
    }
}

#[derive(Debug)]
pub struct NavigationTicket {
    generation: u64,
    latest: watch::Receiver<u64>,
}

impl NavigationTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self) -> bool {
        *self.latest.borrow() == self.generation
    }

    /// Completes once a newer ticket has been issued
    ///
    /// Also completes if the sequencer is gone, since no router is left to
    /// apply a decision.
    pub async fn superseded(&mut self) {
        let generation = self.generation;
        let _ = self.latest.wait_for(|latest| *latest != generation).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_new_ticket_supersedes_old() {
        let sequencer = NavigationSequencer::new();
        let first = sequencer.issue();
        assert!(first.is_current());

        let second = sequencer.issue();
        assert!(!first.is_current());
        assert!(second.is_current());
        assert!(second.generation() > first.generation());
    }

    #[tokio::test]
    async fn test_superseded_completes_on_new_issue() {
        let sequencer = NavigationSequencer::new();
        let mut ticket = sequencer.issue();
        let _newer = sequencer.issue();

        tokio::time::timeout(Duration::from_millis(100), ticket.superseded())
            .await
            .expect("ticket should already be superseded");
    }

    #[tokio::test(start_paused = true)]
    async fn test_current_ticket_stays_pending() {
        let sequencer = NavigationSequencer::new();
        let mut ticket = sequencer.issue();

        let result = tokio::time::timeout(Duration::from_secs(1), ticket.superseded()).await;
        assert!(result.is_err());
    }
}
