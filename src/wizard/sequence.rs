use super::card::CardIndex;
use crate::errors::WizardError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub current_index: CardIndex,
    /// indices advanced from and not yet retreated to, most recent last
    pub history: Vec<CardIndex>,
}

///
/// keeps track of where the wizard is and how it got there.
///
/// only knows about indices: validation, branching and rendering
/// are decided by the caller
pub struct CardSequence {
    state: NavigationState,
}

impl CardSequence {
    pub fn new(initial_index: CardIndex) -> Self {
        CardSequence {
            state: NavigationState {
                current_index: initial_index,
                history: Vec::new(),
            },
        }
    }

    pub fn peek_current_index(&self) -> CardIndex {
        self.state.current_index
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn history(&self) -> &[CardIndex] {
        &self.state.history
    }

    pub fn has_history(&self) -> bool {
        !self.state.history.is_empty()
    }

    ///
    /// target of a forward move: override if given, otherwise the next card.
    /// current index is pushed into history
    pub fn compute_advance_target(&mut self, override_target: Option<CardIndex>) -> CardIndex {
        let target = override_target.unwrap_or(self.state.current_index + 1);
        self.state.history.push(self.state.current_index);
        target
    }

    ///
    /// target of a backward move - the card we most recently advanced from
    pub fn compute_retreat_target(&mut self) -> Result<CardIndex, WizardError> {
        self.state.history.pop().ok_or(WizardError::EmptyHistory)
    }

    pub fn commit(&mut self, new_index: CardIndex) {
        self.state.current_index = new_index;
    }

    pub fn reset_to_initial(&mut self, initial_index: CardIndex) {
        self.state.history.clear();
        self.state.current_index = initial_index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_advance() {
        let mut seq = CardSequence::new(0);
        let target = seq.compute_advance_target(None);
        assert_eq!(1, target);
        assert_eq!(&[0], seq.history());
        // not committed yet
        assert_eq!(0, seq.peek_current_index());
        seq.commit(target);
        assert_eq!(1, seq.peek_current_index());
    }

    #[test]
    fn override_advance() {
        let mut seq = CardSequence::new(1);
        assert_eq!(7, seq.compute_advance_target(Some(7)));
        assert_eq!(&[1], seq.history());
    }

    #[test]
    fn retreat_pops_in_lifo_order() {
        let mut seq = CardSequence::new(0);
        for _ in 0..3 {
            let t = seq.compute_advance_target(None);
            seq.commit(t);
        }
        assert_eq!(&[0, 1, 2], seq.history());
        assert_eq!(Ok(2), seq.compute_retreat_target());
        assert_eq!(Ok(1), seq.compute_retreat_target());
        assert_eq!(Ok(0), seq.compute_retreat_target());
        assert_eq!(Err(WizardError::EmptyHistory), seq.compute_retreat_target());
    }

    #[test]
    fn reset_clears_history() {
        let mut seq = CardSequence::new(2);
        let t = seq.compute_advance_target(Some(5));
        seq.commit(t);
        seq.reset_to_initial(2);
        assert_eq!(
            &NavigationState {
                current_index: 2,
                history: Vec::new()
            },
            seq.state()
        );
    }
}
