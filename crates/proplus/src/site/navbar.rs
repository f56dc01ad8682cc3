use super::routes::Route;
use super::{next_component_id, page_stub, ComponentId};
use crate::notifications::NotificationCenter;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavIcon {
    ShoppingCart,
    Key,
    Users,
    PlusCircle,
    LogIn,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct NavItem {
    pub name: &'static str,
    pub route: Route,
    pub icon: NavIcon,
}

/// Top navigation bar. Constructed once by the shell and kept across route
/// transitions; only the mobile menu flag is mutable.
#[derive(Debug)]
pub struct Navbar {
    id: ComponentId,
    menu_open: bool,
}

impl Navbar {
    pub(crate) fn new() -> Self {
        Self {
            id: next_component_id(),
            menu_open: false,
        }
    }

    pub const fn items() -> [NavItem; 4] {
        [
            NavItem {
                name: "Comprar",
                route: Route::Buy,
                icon: NavIcon::ShoppingCart,
            },
            NavItem {
                name: "Arrendar",
                route: Route::Rent,
                icon: NavIcon::Key,
            },
            NavItem {
                name: "Agentes",
                route: Route::Agents,
                icon: NavIcon::Users,
            },
            NavItem {
                name: "Publicar",
                route: Route::Publish,
                icon: NavIcon::PlusCircle,
            },
        ]
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// A nav-item click: every destination except home is a stub, so the
    /// click itself advertises that before navigation takes over. Selecting
    /// an item also closes the mobile menu.
    pub fn nav_click(&mut self, route: Route, center: &NotificationCenter) {
        if route != Route::Home {
            center.notify(page_stub());
        }
        self.menu_open = false;
    }

    pub fn view(&self, brand: &str, current: Route) -> NavbarView {
        NavbarView {
            brand: brand.to_string(),
            menu_open: self.menu_open,
            items: Self::items()
                .into_iter()
                .map(|item| NavItemView {
                    name: item.name,
                    path: item.route.path(),
                    icon: item.icon,
                    active: item.route == current,
                })
                .collect(),
            access_icon: NavIcon::LogIn,
            access_label: "Acceder",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NavbarView {
    pub brand: String,
    pub menu_open: bool,
    pub items: Vec<NavItemView>,
    pub access_icon: NavIcon,
    pub access_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavItemView {
    pub name: &'static str,
    pub path: &'static str,
    pub icon: NavIcon,
    pub active: bool,
}
