use super::auth::{AuthModal, AuthModalView, AuthMode};
use super::footer::{Footer, FooterView};
use super::navbar::{Navbar, NavbarView};
use super::pages::{PageInstance, PageView};
use super::routes::Route;
use crate::notifications::NotificationCenter;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// The router/layout shell: maps the current route to a mounted page and
/// wraps it in the persistent navbar/footer frame. Navbar, footer, and the
/// auth modal are built once and keep their identity across transitions;
/// only the page is swapped.
#[derive(Debug)]
pub struct SiteShell {
    notifications: Arc<NotificationCenter>,
    navbar: Navbar,
    footer: Footer,
    auth: AuthModal,
    page: PageInstance,
    history: Vec<Route>,
}

impl SiteShell {
    /// Shell rooted at the home route.
    pub fn new(notifications: Arc<NotificationCenter>) -> Self {
        Self::at(Route::Home, notifications)
    }

    /// Shell rooted at an arbitrary route (the path at load time).
    pub fn at(route: Route, notifications: Arc<NotificationCenter>) -> Self {
        let mut page = PageInstance::new(route);
        page.mount(&notifications);

        Self {
            navbar: Navbar::new(),
            footer: Footer::new(),
            auth: AuthModal::new(),
            page,
            history: Vec::new(),
            notifications,
        }
    }

    /// Resolves the load-time path; unknown paths have no page.
    pub fn at_path(path: &str, notifications: Arc<NotificationCenter>) -> Option<Self> {
        Route::from_path(path).map(|route| Self::at(route, notifications))
    }

    pub fn current_route(&self) -> Route {
        self.page.route()
    }

    pub fn notifications(&self) -> &Arc<NotificationCenter> {
        &self.notifications
    }

    /// Unmounts the current page and mounts the one bound to `route`. A
    /// navigation to the current route is a no-op. Notifications raised by
    /// the old page are not cancelled.
    pub fn navigate_to(&mut self, route: Route) {
        if route == self.page.route() {
            return;
        }

        info!(from = ?self.page.route(), to = ?route, "route transition");
        self.history.push(self.page.route());
        let mut page = PageInstance::new(route);
        page.mount(&self.notifications);
        self.page = page;
    }

    pub fn navigate_path(&mut self, path: &str) -> bool {
        match Route::from_path(path) {
            Some(route) => {
                self.navigate_to(route);
                true
            }
            None => false,
        }
    }

    /// Programmatic back navigation. Returns false when there is nowhere to
    /// go back to.
    pub fn navigate_back(&mut self) -> bool {
        let Some(route) = self.history.pop() else {
            return false;
        };

        info!(to = ?route, "back navigation");
        let mut page = PageInstance::new(route);
        page.mount(&self.notifications);
        self.page = page;
        true
    }

    pub fn page(&self) -> &PageInstance {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut PageInstance {
        &mut self.page
    }

    pub fn navbar(&self) -> &Navbar {
        &self.navbar
    }

    pub fn navbar_mut(&mut self) -> &mut Navbar {
        &mut self.navbar
    }

    pub fn footer(&self) -> &Footer {
        &self.footer
    }

    pub fn auth(&self) -> &AuthModal {
        &self.auth
    }

    pub fn auth_mut(&mut self) -> &mut AuthModal {
        &mut self.auth
    }

    /// Opening the auth modal from the navbar also collapses the mobile
    /// menu.
    pub fn open_auth(&mut self, mode: AuthMode) {
        self.navbar.close_menu();
        self.auth.open(mode);
    }

    pub fn render(&self, brand: &str) -> ShellView {
        ShellView {
            route: self.page.route(),
            path: self.page.route().path(),
            navbar: self.navbar.view(brand, self.page.route()),
            page: self.page.render(),
            auth: self.auth.view(),
            footer: self.footer.view(brand),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ShellView {
    pub route: Route,
    pub path: &'static str,
    pub navbar: NavbarView,
    pub page: PageView,
    pub auth: AuthModalView,
    pub footer: FooterView,
}
