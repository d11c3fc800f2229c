//! Transition engine that waits for the test to finish each transition.

use folio_core::{Transition, TransitionEngine, TransitionTicket};

/// Records started transitions and leaves them pending.
#[derive(Debug, Clone, Default)]
pub struct ManualTransitions {
    started: Vec<(Transition, TransitionTicket)>,
    pending: Vec<TransitionTicket>,
    applied: Vec<Transition>,
    stalled: Option<TransitionTicket>,
}

impl ManualTransitions {
    /// Create an engine with nothing started.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every transition started so far, oldest first.
    pub fn started(&self) -> &[(Transition, TransitionTicket)] {
        &self.started
    }

    /// Most recently started transition.
    pub fn last(&self) -> Option<&(Transition, TransitionTicket)> {
        self.started.last()
    }

    /// Tickets not yet handed back.
    pub fn pending(&self) -> &[TransitionTicket] {
        &self.pending
    }

    /// Take every pending ticket, oldest first.
    pub fn drain_pending(&mut self) -> Vec<TransitionTicket> {
        std::mem::take(&mut self.pending)
    }

    /// Zero-length transitions jumped to their end state, oldest first.
    pub fn applied(&self) -> &[Transition] {
        &self.applied
    }

    /// Act as if the completion of the newest pending transition could not
    /// be scheduled. It is reported through `take_stalled` instead.
    pub fn stall(&mut self) -> Option<TransitionTicket> {
        let ticket = self.pending.pop()?;
        self.stalled = Some(ticket);
        Some(ticket)
    }
}

impl TransitionEngine for ManualTransitions {
    fn start(&mut self, transition: &Transition, ticket: TransitionTicket) {
        self.started.push((transition.clone(), ticket));
        self.pending.push(ticket);
    }

    fn apply_final(&mut self, transition: &Transition) {
        self.applied.push(transition.clone());
    }

    fn take_stalled(&mut self) -> Option<TransitionTicket> {
        self.stalled.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{EasingFunction, TransitionTiming};

    #[test]
    fn test_manual_transitions_records_and_drains() {
        let mut engine = ManualTransitions::new();
        let enter = Transition::modal_enter(TransitionTiming::default());
        engine.start(&enter, TransitionTicket(1));
        engine.start(&enter, TransitionTicket(2));

        assert_eq!(engine.started().len(), 2);
        assert_eq!(engine.last().map(|(_, t)| *t), Some(TransitionTicket(2)));
        assert_eq!(engine.drain_pending(), vec![TransitionTicket(1), TransitionTicket(2)]);
        assert!(engine.pending().is_empty());
        assert_eq!(engine.started().len(), 2);
    }

    #[test]
    fn test_manual_transitions_stall_moves_ticket() {
        let mut engine = ManualTransitions::new();
        let exit = Transition::modal_exit(TransitionTiming::default());
        engine.start(&exit, TransitionTicket(7));

        assert_eq!(engine.stall(), Some(TransitionTicket(7)));
        assert!(engine.pending().is_empty());
        assert_eq!(engine.take_stalled(), Some(TransitionTicket(7)));
        assert_eq!(engine.take_stalled(), None);
        assert_eq!(engine.stall(), None);
    }

    #[test]
    fn test_manual_transitions_records_applied() {
        let mut engine = ManualTransitions::new();
        engine.apply_final(&Transition::modal_enter(TransitionTiming::new(
            0,
            EasingFunction::Linear,
        )));
        assert_eq!(engine.applied().len(), 1);
        assert!(engine.started().is_empty());
        assert!(engine.pending().is_empty());
    }
}
