//! Composition of the routed site: the layout shell, the page components,
//! and the interactive widgets whose only side effect is a notification.

mod auth;
mod cards;
mod footer;
mod navbar;
mod pages;
pub mod routes;
mod search;
mod shell;

pub use auth::{AuthForm, AuthModal, AuthModalView, AuthMode, AuthSubmission, SocialProvider};
pub use cards::{CardClick, PropertyCardList};
pub use footer::{Footer, FooterLink, FooterSection, FooterView, SocialIcon, SocialLink};
pub use navbar::{NavIcon, NavItem, NavItemView, Navbar, NavbarView};
pub use pages::{HomeState, ListingState, PageInstance, PageView};
pub use routes::Route;
pub use search::{PriceRange, SearchBar};
pub use shell::{ShellView, SiteShell};

use crate::notifications::Notification;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Stable identity for layout components and mounted pages. Layout pieces
/// keep theirs across navigation; a page gets a fresh one per mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ComponentId(pub u64);

static COMPONENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

pub(crate) fn next_component_id() -> ComponentId {
    ComponentId(COMPONENT_SEQUENCE.fetch_add(1, Ordering::Relaxed))
}

pub(crate) const STUB_DURATION_MS: i64 = 3000;

const PAGE_FOLLOWUP: &str = "¡No te preocupes! Puedes solicitarla en tu próximo mensaje 🚀";
const ACTION_FOLLOWUP: &str =
    "¡No te preocupes! Puedes solicitar esta función en tu próximo mensaje 🚀";

/// The notice every stub page raises at mount.
pub(crate) fn page_stub() -> Notification {
    Notification::new(
        "🚧 Esta función no está implementada aún",
        PAGE_FOLLOWUP,
        STUB_DURATION_MS,
    )
}

/// The notice raised by an interaction whose feature does not exist yet.
pub(crate) fn action_stub(feature: &str) -> Notification {
    Notification::new(
        format!("🚧 {feature} no implementado"),
        ACTION_FOLLOWUP,
        STUB_DURATION_MS,
    )
}

/// Card-action variant: the description names the targeted property.
pub(crate) fn card_stub(feature: &str, property: &str) -> Notification {
    Notification::new(
        format!("🚧 {feature} no implementado"),
        format!("{property}: {ACTION_FOLLOWUP}"),
        STUB_DURATION_MS,
    )
}

pub(crate) fn search_notice(location: &str) -> Notification {
    Notification::new(
        format!("🔍 Buscando en: {location}"),
        ACTION_FOLLOWUP,
        STUB_DURATION_MS,
    )
}
