//! View state of the landing page.
//!
//! Every transition goes through [`LandingState::apply`], so the whole state machine can be
//! exercised without a browser. Components hold it through `use_reducer`.

use std::rc::Rc;

use yew::functional::Reducible;

use crate::navigation::SectionId;

#[derive(Debug, Clone, PartialEq)]
pub struct LandingState {
    pub active_section: SectionId,
    pub menu_open: bool,
    pub modal_open: bool,
    pub copy_confirmed: bool,
    pub copy_failed: bool,
    copy_generation: u64,
}

impl Default for LandingState {
    fn default() -> Self {
        Self {
            active_section: SectionId::Home,
            menu_open: false,
            modal_open: false,
            copy_confirmed: false,
            copy_failed: false,
            copy_generation: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingAction {
    ToggleMenu,
    OpenConfigModal,
    CloseConfigModal,
    /// Reported by the scroll-spy.
    SectionVisible(SectionId),
    /// A navigation scroll was started. Only closes the menu; the scroll-spy settles the
    /// active section once the target is on screen.
    Navigated(SectionId),
    CopySucceeded { generation: u64 },
    CopyFailed,
    CopyConfirmationExpired { generation: u64 },
}

impl LandingState {
    pub fn is_active(&self, id: SectionId) -> bool {
        self.active_section == id
    }

    pub fn copy_generation(&self) -> u64 {
        self.copy_generation
    }

    pub fn apply(&mut self, action: LandingAction) {
        match action {
            LandingAction::ToggleMenu => self.menu_open = !self.menu_open,
            LandingAction::OpenConfigModal => {
                self.modal_open = true;
                self.copy_failed = false;
            }
            LandingAction::CloseConfigModal => self.modal_open = false,
            LandingAction::SectionVisible(id) => self.active_section = id,
            LandingAction::Navigated(_) => self.menu_open = false,
            LandingAction::CopySucceeded { generation } => {
                self.copy_confirmed = true;
                self.copy_failed = false;
                self.copy_generation = generation;
            }
            LandingAction::CopyFailed => {
                self.copy_confirmed = false;
                self.copy_failed = true;
            }
            LandingAction::CopyConfirmationExpired { generation } => {
                // A stale reset from a superseded copy must not clear a newer confirmation.
                if generation == self.copy_generation {
                    self.copy_confirmed = false;
                }
            }
        }
    }
}

impl Reducible for LandingState {
    type Action = LandingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn applied(actions: &[LandingAction]) -> LandingState {
        let mut state = LandingState::default();
        for action in actions {
            state.apply(*action);
        }
        state
    }

    #[test]
    fn fresh_state() {
        let state = LandingState::default();
        assert_eq!(state.active_section, SectionId::Home);
        assert!(!state.menu_open);
        assert!(!state.modal_open);
        assert!(!state.copy_confirmed);
        assert!(!state.copy_failed);
    }

    #[test]
    fn exactly_one_section_is_active() {
        let mut state = LandingState::default();
        for id in SectionId::ALL.into_iter().rev() {
            state.apply(LandingAction::SectionVisible(id));
            let active = SectionId::ALL.iter().filter(|s| state.is_active(**s)).count();
            assert_eq!(active, 1);
            assert!(state.is_active(id));
        }
    }

    #[test]
    fn navigation_closes_menu_but_leaves_active_section() {
        for id in SectionId::ALL {
            for menu_open in [false, true] {
                let mut state = applied(&[LandingAction::SectionVisible(SectionId::Features)]);
                state.menu_open = menu_open;
                state.apply(LandingAction::Navigated(id));
                assert!(!state.menu_open);
                assert_eq!(state.active_section, SectionId::Features);
            }
        }
    }

    #[test]
    fn menu_toggles() {
        let state = applied(&[LandingAction::ToggleMenu]);
        assert!(state.menu_open);
        let state = applied(&[LandingAction::ToggleMenu, LandingAction::ToggleMenu]);
        assert!(!state.menu_open);
    }

    #[test]
    fn stale_expiry_is_ignored() {
        let state = applied(&[
            LandingAction::CopySucceeded { generation: 1 },
            LandingAction::CopySucceeded { generation: 2 },
            LandingAction::CopyConfirmationExpired { generation: 1 },
        ]);
        assert!(state.copy_confirmed);

        let state = applied(&[
            LandingAction::CopySucceeded { generation: 1 },
            LandingAction::CopySucceeded { generation: 2 },
            LandingAction::CopyConfirmationExpired { generation: 2 },
        ]);
        assert!(!state.copy_confirmed);
    }

    #[test]
    fn failure_is_visible_and_never_confirms() {
        let state = applied(&[LandingAction::OpenConfigModal, LandingAction::CopyFailed]);
        assert!(state.copy_failed);
        assert!(!state.copy_confirmed);

        let state = applied(&[
            LandingAction::CopySucceeded { generation: 1 },
            LandingAction::CopyFailed,
        ]);
        assert!(!state.copy_confirmed);
    }

    #[test]
    fn reopening_the_modal_clears_a_stale_failure() {
        let state = applied(&[
            LandingAction::OpenConfigModal,
            LandingAction::CopyFailed,
            LandingAction::CloseConfigModal,
            LandingAction::OpenConfigModal,
        ]);
        assert!(!state.copy_failed);
    }

    #[test]
    fn closing_the_modal_keeps_copy_state() {
        let state = applied(&[
            LandingAction::OpenConfigModal,
            LandingAction::CopySucceeded { generation: 1 },
            LandingAction::CloseConfigModal,
        ]);
        assert!(!state.modal_open);
        assert!(state.copy_confirmed);
    }

    #[test]
    fn reducer_does_not_mutate_the_previous_state() {
        let before = Rc::new(LandingState::default());
        let after = before.clone().reduce(LandingAction::OpenConfigModal);
        assert!(!before.modal_open);
        assert!(after.modal_open);
    }
}
