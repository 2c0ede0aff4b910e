//! Named pages of the portal and the navigator that moves between them.

use std::sync::{Arc, Mutex, MutexGuard};

use strum::{AsRefStr, Display, EnumIter, EnumString};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, EnumIter)]
pub enum Page {
    #[strum(serialize = "logIn")]
    LogIn,
    #[strum(serialize = "signIn")]
    SignIn,
    #[strum(serialize = "dashboard")]
    Dashboard,
    #[strum(serialize = "maintenance")]
    Maintenance,
    #[strum(serialize = "errorPage")]
    ErrorPage,
}

impl Page {
    /// Absolute path of the page, e.g. `/logIn`
    pub fn path(&self) -> String {
        format!("/{}", self.as_ref())
    }

    /// Resolve a path to a page.
    ///
    /// The empty path lands on the login page; unknown paths land on the
    /// error page. Page names are case-sensitive.
    pub fn resolve(path: &str) -> Page {
        let name = path.trim().trim_matches('/');
        if name.is_empty() {
            return Page::LogIn;
        }
        name.parse().unwrap_or(Page::ErrorPage)
    }
}

/// Receives navigation requests from forms
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    fn navigate(&self, page: Page);
}

#[derive(Debug)]
struct RouterState {
    current: Page,
    history: Vec<Page>,
}

/// In-process navigator that tracks the current page; clones share state
#[derive(Clone, Debug)]
pub struct Router {
    state: Arc<Mutex<RouterState>>,
}

impl Router {
    pub fn new(start: Page) -> Self {
        Self {
            state: Arc::new(Mutex::new(RouterState {
                current: start,
                history: Vec::new(),
            })),
        }
    }

    fn state(&self) -> MutexGuard<'_, RouterState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn current(&self) -> Page {
        self.state().current
    }

    /// Pages navigated to, oldest first (the start page is not included)
    pub fn history(&self) -> Vec<Page> {
        self.state().history.clone()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Page::SignIn)
    }
}

impl Navigator for Router {
    fn navigate(&self, page: Page) {
        let mut state = self.state();
        info!(from = %state.current, to = %page, "Navigating");
        state.current = page;
        state.history.push(page);
    }
}
