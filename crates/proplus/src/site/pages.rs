use super::cards::PropertyCardList;
use super::routes::Route;
use super::search::SearchBar;
use super::{next_component_id, ComponentId};
use crate::catalog::{
    featured_agents, featured_properties, how_it_works_steps, listed_properties, testimonials,
    AgentProfile, HowItWorksStep, PropertyCardView, Testimonial,
};
use crate::notifications::NotificationCenter;
use serde::Serialize;
use tracing::debug;

/// Home page state: the collapsible hero search plus the featured card
/// list.
#[derive(Debug)]
pub struct HomeState {
    search_visible: bool,
    pub search: SearchBar,
    pub cards: PropertyCardList,
}

impl HomeState {
    fn new() -> Self {
        Self {
            search_visible: false,
            search: SearchBar::new(),
            cards: PropertyCardList::new(featured_properties()),
        }
    }

    pub fn search_visible(&self) -> bool {
        self.search_visible
    }

    pub fn show_search(&mut self) {
        self.search_visible = true;
    }

    /// Clicking outside the search collapses it back to the explore button.
    pub fn hide_search(&mut self) {
        self.search_visible = false;
    }
}

/// Featured-properties page state: the full catalog through the shared
/// card list.
#[derive(Debug)]
pub struct ListingState {
    pub cards: PropertyCardList,
}

#[derive(Debug)]
enum PageState {
    Home(HomeState),
    Listing(ListingState),
    Placeholder,
}

/// One mounted page. The mount effect is keyed to this instance: it fires
/// once per mount, never on re-render, and a fresh instance (new identity)
/// fires again.
#[derive(Debug)]
pub struct PageInstance {
    id: ComponentId,
    route: Route,
    mount_notified: bool,
    state: PageState,
}

impl PageInstance {
    pub(crate) fn new(route: Route) -> Self {
        let state = match route {
            Route::Home => PageState::Home(HomeState::new()),
            Route::FeaturedProperties => PageState::Listing(ListingState {
                cards: PropertyCardList::new(listed_properties()),
            }),
            Route::Buy | Route::Rent | Route::Agents | Route::Publish | Route::Login => {
                PageState::Placeholder
            }
        };

        Self {
            id: next_component_id(),
            route,
            mount_notified: false,
            state,
        }
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn route(&self) -> Route {
        self.route
    }

    /// Mount-time side effect, guarded so repeated calls (re-renders) do
    /// nothing.
    pub(crate) fn mount(&mut self, center: &NotificationCenter) {
        if self.mount_notified {
            return;
        }
        self.mount_notified = true;

        if let Some(notice) = self.route.mount_notice() {
            debug!(route = ?self.route, "stub page mounted");
            center.notify(notice);
        }
    }

    pub fn home(&self) -> Option<&HomeState> {
        match &self.state {
            PageState::Home(home) => Some(home),
            _ => None,
        }
    }

    pub fn home_mut(&mut self) -> Option<&mut HomeState> {
        match &mut self.state {
            PageState::Home(home) => Some(home),
            _ => None,
        }
    }

    /// The card list of the current page, when it renders one.
    pub fn cards_mut(&mut self) -> Option<&mut PropertyCardList> {
        match &mut self.state {
            PageState::Home(home) => Some(&mut home.cards),
            PageState::Listing(listing) => Some(&mut listing.cards),
            PageState::Placeholder => None,
        }
    }

    /// Side-effect-free projection of the page.
    pub fn render(&self) -> PageView {
        let title = self.route.page_title();
        let meta_description = self.route.meta_description();

        match &self.state {
            PageState::Home(home) => PageView::Home {
                title,
                meta_description,
                search_visible: home.search_visible,
                properties: home.cards.views(),
                steps: how_it_works_steps(),
                agents: featured_agents(),
                testimonials: testimonials(),
            },
            PageState::Listing(listing) => PageView::Listing {
                title,
                meta_description,
                properties: listing.cards.views(),
            },
            PageState::Placeholder => {
                let (heading, message) = placeholder_copy(self.route);
                PageView::Placeholder {
                    title,
                    meta_description,
                    heading,
                    message,
                }
            }
        }
    }
}

fn placeholder_copy(route: Route) -> (&'static str, &'static str) {
    match route {
        Route::Buy => (
            "Comprar Propiedades",
            "Esta página estará disponible pronto con todas las propiedades en venta.",
        ),
        Route::Rent => (
            "Arrendar Propiedades",
            "Esta página estará disponible pronto con todas las propiedades en arriendo.",
        ),
        Route::Agents => (
            "Nuestros Agentes",
            "Esta página estará disponible pronto con información de nuestro equipo.",
        ),
        Route::Login => (
            "Iniciar Sesión",
            "Esta página estará disponible pronto con el sistema de autenticación.",
        ),
        Route::Publish => (
            "Publica tu Propiedad",
            "Nuestra plataforma para publicar propiedades estará disponible muy pronto. ¡Prepárate para llegar a miles de compradores potenciales!",
        ),
        Route::Home | Route::FeaturedProperties => ("", ""),
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageView {
    Home {
        title: &'static str,
        meta_description: &'static str,
        search_visible: bool,
        properties: Vec<PropertyCardView>,
        steps: Vec<HowItWorksStep>,
        agents: Vec<AgentProfile>,
        testimonials: Vec<Testimonial>,
    },
    Listing {
        title: &'static str,
        meta_description: &'static str,
        properties: Vec<PropertyCardView>,
    },
    Placeholder {
        title: &'static str,
        meta_description: &'static str,
        heading: &'static str,
        message: &'static str,
    },
}
