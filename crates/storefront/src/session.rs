//! Session state: current user, current page, and theme.
//!
//! One `Session` lives for the duration of a browser visit (here, a CLI
//! invocation or a test). Logging out resets the user and page to their
//! defaults; the theme preference deliberately survives logout.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use print_pro_core::User;

use crate::error::AppError;

/// Color theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light backgrounds, dark text.
    #[default]
    Light,
    /// Dark backgrounds, light text.
    Dark,
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(format!("invalid theme: {s}")),
        }
    }
}

/// The displayable pages of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Page {
    /// Landing page; always reachable.
    #[default]
    Home,
    /// Login form.
    Auth,
    /// The order draft workflow; requires a user.
    NewOrder,
    /// The user's own orders; requires a user.
    Dashboard,
    /// All orders with status controls; requires an admin.
    AdminDashboard,
    /// Government e-services catalog; requires a user.
    EServices,
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(f, "Home"),
            Self::Auth => write!(f, "Login"),
            Self::NewOrder => write!(f, "New Order"),
            Self::Dashboard => write!(f, "Dashboard"),
            Self::AdminDashboard => write!(f, "Admin Dashboard"),
            Self::EServices => write!(f, "E-Services"),
        }
    }
}

/// Per-visit session state.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<User>,
    page: Page,
    theme: Theme,
}

impl Session {
    /// Start an anonymous session on the home page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The authenticated user, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// The page currently displayed.
    #[must_use]
    pub const fn page(&self) -> Page {
        self.page
    }

    /// The active theme.
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// Switch themes. The preference is session-scoped and survives logout.
    pub const fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Authenticate as `user` and route to the appropriate dashboard.
    pub fn login(&mut self, user: User) {
        self.page = if user.is_admin {
            Page::AdminDashboard
        } else {
            Page::Dashboard
        };
        tracing::info!(user_id = %user.id, admin = user.is_admin, "logged in");
        self.user = Some(user);
    }

    /// Drop the user and return to the home page.
    pub fn logout(&mut self) {
        self.user = None;
        self.page = Page::Home;
    }

    /// Navigate to `page`, enforcing its access rule.
    ///
    /// # Errors
    ///
    /// [`AppError::LoginRequired`] when the page needs a user and the
    /// session is anonymous; [`AppError::AccessDenied`] when it needs an
    /// admin and the current user is not one. The session stays on its
    /// current page in both cases.
    pub fn navigate(&mut self, page: Page) -> Result<Page, AppError> {
        match page {
            Page::Home | Page::Auth => {}
            Page::NewOrder | Page::Dashboard | Page::EServices => {
                if self.user.is_none() {
                    return Err(AppError::LoginRequired(page));
                }
            }
            Page::AdminDashboard => {
                if !self.user.as_ref().is_some_and(|user| user.is_admin) {
                    return Err(AppError::AccessDenied);
                }
            }
        }
        self.page = page;
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use print_pro_core::{Email, UserId};

    fn user(is_admin: bool) -> User {
        User {
            id: UserId::new(if is_admin { "admin1" } else { "user1" }),
            email: Email::parse("user@example.com").unwrap(),
            mobile: "1234567890".to_owned(),
            is_admin,
        }
    }

    #[test]
    fn test_login_routes_by_admin_flag() {
        let mut session = Session::new();
        session.login(user(false));
        assert_eq!(session.page(), Page::Dashboard);

        let mut session = Session::new();
        session.login(user(true));
        assert_eq!(session.page(), Page::AdminDashboard);
    }

    #[test]
    fn test_logout_resets_user_and_page_but_keeps_theme() {
        let mut session = Session::new();
        session.set_theme(Theme::Dark);
        session.login(user(false));
        session.logout();

        assert!(session.user().is_none());
        assert_eq!(session.page(), Page::Home);
        assert_eq!(session.theme(), Theme::Dark);
    }

    #[test]
    fn test_anonymous_navigation_is_gated() {
        let mut session = Session::new();
        assert_eq!(
            session.navigate(Page::NewOrder),
            Err(AppError::LoginRequired(Page::NewOrder))
        );
        assert_eq!(session.navigate(Page::AdminDashboard), Err(AppError::AccessDenied));
        assert_eq!(session.page(), Page::Home);
        assert_eq!(session.navigate(Page::Auth), Ok(Page::Auth));
    }

    #[test]
    fn test_non_admin_cannot_reach_admin_dashboard() {
        let mut session = Session::new();
        session.login(user(false));
        assert_eq!(session.navigate(Page::AdminDashboard), Err(AppError::AccessDenied));
        assert_eq!(session.navigate(Page::EServices), Ok(Page::EServices));
    }
}
