//! Navbar menu state machine.
//!
//! Two independent disclosure widgets (profile dropdown and mobile drawer) plus the
//! logout lifecycle. The navbar feeds every user interaction in as a [`NavEvent`] and
//! executes whatever [`NavEffect`]s come back; rendering reads the state only.
//!
//! No event that targets one widget touches the other one's flag. Logout is the only
//! event allowed to close both, and only because it is issued from inside each of them.

use dioxus::logger::tracing::debug;

use crate::core::routes::NavRoute;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Disclosure {
    #[default]
    Closed,
    Open,
}

impl Disclosure {
    pub fn is_open(self) -> bool {
        matches!(self, Disclosure::Open)
    }

    pub fn toggled(self) -> Self {
        match self {
            Disclosure::Closed => Disclosure::Open,
            Disclosure::Open => Disclosure::Closed,
        }
    }
}

/// Where a logout request was issued from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOrigin {
    ProfileDropdown,
    MobileDrawer,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LogoutStatus {
    #[default]
    Idle,
    Pending,
    /// Last logout reported a failure; holds the message for the notice.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    AvatarClicked,
    /// A click reached the document while the outside-click listener was attached.
    DocumentClicked {
        inside_dropdown: bool,
    },
    ProfileItemSelected,
    HamburgerClicked,
    DrawerCloseClicked,
    OverlayClicked,
    DrawerLinkSelected,
    LogoutRequested(MenuOrigin),
    LogoutSettled(Result<(), String>),
    NoticeDismissed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEffect {
    /// Ask the authentication collaborator to end the session.
    EndSession,
    Navigate(NavRoute),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuState {
    pub profile_dropdown: Disclosure,
    pub mobile_menu: Disclosure,
    pub logout: LogoutStatus,
}

impl MenuState {
    pub fn logout_pending(&self) -> bool {
        self.logout == LogoutStatus::Pending
    }

    /// Message of the last failed logout, if the notice has not been dismissed.
    pub fn logout_failure(&self) -> Option<&str> {
        match &self.logout {
            LogoutStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Apply one event and return the side effects the caller must run, in order.
    pub fn apply(&mut self, event: NavEvent) -> Vec<NavEffect> {
        debug!(?event, "navbar event");
        match event {
            NavEvent::AvatarClicked => {
                self.profile_dropdown = self.profile_dropdown.toggled();
                Vec::new()
            }
            NavEvent::DocumentClicked { inside_dropdown } => {
                if self.profile_dropdown.is_open() && !inside_dropdown {
                    self.profile_dropdown = Disclosure::Closed;
                }
                Vec::new()
            }
            NavEvent::ProfileItemSelected => {
                self.profile_dropdown = Disclosure::Closed;
                Vec::new()
            }
            NavEvent::HamburgerClicked => {
                self.mobile_menu = Disclosure::Open;
                Vec::new()
            }
            NavEvent::DrawerCloseClicked
            | NavEvent::OverlayClicked
            | NavEvent::DrawerLinkSelected => {
                self.mobile_menu = Disclosure::Closed;
                Vec::new()
            }
            NavEvent::LogoutRequested(origin) => {
                if origin == MenuOrigin::MobileDrawer {
                    self.mobile_menu = Disclosure::Closed;
                }
                self.profile_dropdown = Disclosure::Closed;
                if self.logout_pending() {
                    return Vec::new();
                }
                self.logout = LogoutStatus::Pending;
                vec![NavEffect::EndSession]
            }
            NavEvent::LogoutSettled(outcome) => {
                // A settle without a pending request is a stale report; drop it.
                if !self.logout_pending() {
                    return Vec::new();
                }
                self.profile_dropdown = Disclosure::Closed;
                self.logout = match outcome {
                    Ok(()) => LogoutStatus::Idle,
                    Err(message) => LogoutStatus::Failed(message),
                };
                vec![NavEffect::Navigate(NavRoute::Home)]
            }
            NavEvent::NoticeDismissed => {
                if matches!(self.logout, LogoutStatus::Failed(_)) {
                    self.logout = LogoutStatus::Idle;
                }
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_after(events: impl IntoIterator<Item = NavEvent>) -> MenuState {
        let mut state = MenuState::default();
        for event in events {
            state.apply(event);
        }
        state
    }

    #[test]
    fn starts_fully_closed() {
        let state = MenuState::default();
        assert_eq!(state.profile_dropdown, Disclosure::Closed);
        assert_eq!(state.mobile_menu, Disclosure::Closed);
        assert_eq!(state.logout, LogoutStatus::Idle);
    }

    #[test]
    fn avatar_click_toggles() {
        for clicks in 0..6 {
            let state = state_after(std::iter::repeat(NavEvent::AvatarClicked).take(clicks));
            assert_eq!(state.profile_dropdown.is_open(), clicks % 2 == 1, "{clicks} clicks");
        }
    }

    #[test]
    fn outside_click_closes_and_inside_click_keeps_open() {
        let mut state = state_after([NavEvent::AvatarClicked]);

        state.apply(NavEvent::DocumentClicked {
            inside_dropdown: true,
        });
        assert!(state.profile_dropdown.is_open());

        state.apply(NavEvent::DocumentClicked {
            inside_dropdown: false,
        });
        assert!(!state.profile_dropdown.is_open());
    }

    #[test]
    fn outside_click_while_closed_is_a_no_op() {
        let mut state = MenuState::default();
        let effects = state.apply(NavEvent::DocumentClicked {
            inside_dropdown: false,
        });
        assert!(effects.is_empty());
        assert_eq!(state, MenuState::default());
    }

    #[test]
    fn drawer_events_leave_dropdown_alone() {
        for dropdown_open in [false, true] {
            let mut state = MenuState::default();
            if dropdown_open {
                state.apply(NavEvent::AvatarClicked);
            }
            for event in [
                NavEvent::HamburgerClicked,
                NavEvent::DrawerCloseClicked,
                NavEvent::HamburgerClicked,
                NavEvent::OverlayClicked,
                NavEvent::HamburgerClicked,
                NavEvent::DrawerLinkSelected,
            ] {
                state.apply(event);
                assert_eq!(state.profile_dropdown.is_open(), dropdown_open);
            }
        }
    }

    #[test]
    fn dropdown_events_leave_drawer_alone() {
        for drawer_open in [false, true] {
            let mut state = MenuState::default();
            if drawer_open {
                state.apply(NavEvent::HamburgerClicked);
            }
            for event in [
                NavEvent::AvatarClicked,
                NavEvent::DocumentClicked {
                    inside_dropdown: true,
                },
                NavEvent::ProfileItemSelected,
                NavEvent::AvatarClicked,
                NavEvent::DocumentClicked {
                    inside_dropdown: false,
                },
            ] {
                state.apply(event);
                assert_eq!(state.mobile_menu.is_open(), drawer_open);
            }
        }
    }

    #[test]
    fn every_drawer_exit_closes_it() {
        for exit in [
            NavEvent::DrawerCloseClicked,
            NavEvent::OverlayClicked,
            NavEvent::DrawerLinkSelected,
            NavEvent::LogoutRequested(MenuOrigin::MobileDrawer),
        ] {
            let state = state_after([NavEvent::HamburgerClicked, exit.clone()]);
            assert!(!state.mobile_menu.is_open(), "{exit:?} left the drawer open");
        }
    }

    #[test]
    fn logout_from_dropdown_closes_it_and_navigates_home() {
        let mut state = state_after([NavEvent::HamburgerClicked, NavEvent::AvatarClicked]);

        let effects = state.apply(NavEvent::LogoutRequested(MenuOrigin::ProfileDropdown));
        assert_eq!(effects, [NavEffect::EndSession]);
        assert!(!state.profile_dropdown.is_open());
        assert!(state.mobile_menu.is_open());
        assert!(state.logout_pending());

        let effects = state.apply(NavEvent::LogoutSettled(Ok(())));
        assert_eq!(effects, [NavEffect::Navigate(NavRoute::Home)]);
        assert_eq!(state.logout, LogoutStatus::Idle);
    }

    #[test]
    fn repeated_logout_while_pending_is_ignored() {
        let mut state = MenuState::default();
        assert_eq!(
            state.apply(NavEvent::LogoutRequested(MenuOrigin::ProfileDropdown)),
            [NavEffect::EndSession]
        );

        state.apply(NavEvent::HamburgerClicked);
        let effects = state.apply(NavEvent::LogoutRequested(MenuOrigin::MobileDrawer));
        assert!(effects.is_empty());
        assert!(!state.mobile_menu.is_open());
        assert!(state.logout_pending());
    }

    #[test]
    fn failed_logout_still_navigates_and_keeps_a_notice() {
        let mut state = MenuState::default();
        state.apply(NavEvent::LogoutRequested(MenuOrigin::ProfileDropdown));

        let effects = state.apply(NavEvent::LogoutSettled(Err("session is not active".into())));
        assert_eq!(effects, [NavEffect::Navigate(NavRoute::Home)]);
        assert_eq!(state.logout_failure(), Some("session is not active"));

        state.apply(NavEvent::NoticeDismissed);
        assert_eq!(state.logout_failure(), None);
    }

    #[test]
    fn stale_settle_is_dropped() {
        let mut state = MenuState::default();
        assert!(state.apply(NavEvent::LogoutSettled(Ok(()))).is_empty());
        assert_eq!(state, MenuState::default());
    }
}
