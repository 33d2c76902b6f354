//! Navigation Menu
//!
//! Menu entries whose visibility follows the logged-in view state.

use crate::application::logged_in::LoggedInState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Always,
    LoggedIn,
    LoggedOut,
}

impl Visibility {
    pub fn allows(self, is_logged_in: bool) -> bool {
        match self {
            Visibility::Always => true,
            Visibility::LoggedIn => is_logged_in,
            Visibility::LoggedOut => !is_logged_in,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    SignOut,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavMenuItem {
    pub label: &'static str,
    pub icon: &'static str,
    pub path: &'static str,
    pub show: Visibility,
    pub action: Option<MenuAction>,
}

pub fn default_menu() -> Vec<NavMenuItem> {
    vec![
        NavMenuItem {
            label: "Add",
            icon: "pi pi-plus",
            path: "/",
            show: Visibility::LoggedIn,
            action: None,
        },
        NavMenuItem {
            label: "Interviews",
            icon: "pi pi-list",
            path: "/list",
            show: Visibility::LoggedIn,
            action: None,
        },
        NavMenuItem {
            label: "Statistics",
            icon: "pi pi-chart-pie",
            path: "/statistic",
            show: Visibility::LoggedIn,
            action: None,
        },
        NavMenuItem {
            label: "Sign in",
            icon: "pi pi-user",
            path: "/auth",
            show: Visibility::LoggedOut,
            action: None,
        },
        NavMenuItem {
            label: "Sign out",
            icon: "pi pi-sign-out",
            path: "/auth",
            show: Visibility::LoggedIn,
            action: Some(MenuAction::SignOut),
        },
    ]
}

/// Entries visible for the state computed at the last lifecycle point
pub fn visible_items<'a>(items: &'a [NavMenuItem], state: &LoggedInState) -> Vec<&'a NavMenuItem> {
    items
        .iter()
        .filter(|item| item.show.allows(state.is_logged_in()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::session_store::SessionStore;
    use kernel::identity::Identity;

    fn labels(items: &[&NavMenuItem]) -> Vec<&'static str> {
        items.iter().map(|i| i.label).collect()
    }

    #[test]
    fn test_logged_out_menu() {
        let mut state = LoggedInState::new(SessionStore::new());
        state.on_before_mount();
        let menu = default_menu();
        assert_eq!(labels(&visible_items(&menu, &state)), vec!["Sign in"]);
    }

    #[test]
    fn test_logged_in_menu_has_sign_out_action() {
        let store = SessionStore::new();
        store.set_user_id(&Identity::new("u1").unwrap());
        let mut state = LoggedInState::new(store);
        state.on_before_mount();

        let menu = default_menu();
        let visible = visible_items(&menu, &state);
        assert_eq!(
            labels(&visible),
            vec!["Add", "Interviews", "Statistics", "Sign out"]
        );
        assert_eq!(visible[3].action, Some(MenuAction::SignOut));
    }
}
