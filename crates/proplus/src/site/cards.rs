use super::{card_stub, next_component_id, ComponentId};
use crate::catalog::{PropertyCardView, PropertyId, PropertyRecord};
use crate::notifications::NotificationCenter;
use std::collections::HashSet;

/// Where a click landed on a property card. The favorite control and the
/// details button swallow the event before it reaches the card, so one
/// click is exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardClick {
    Card,
    FavoriteControl,
    DetailsButton,
}

/// Renders a slice of the catalog and owns the favorite set for it. The set
/// lives and dies with the list; nothing is persisted.
#[derive(Debug)]
pub struct PropertyCardList {
    id: ComponentId,
    properties: Vec<PropertyRecord>,
    favorites: HashSet<PropertyId>,
}

impl PropertyCardList {
    pub fn new(properties: Vec<PropertyRecord>) -> Self {
        Self {
            id: next_component_id(),
            properties,
            favorites: HashSet::new(),
        }
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn contains(&self, id: PropertyId) -> bool {
        self.properties.iter().any(|property| property.id == id)
    }

    pub fn is_favorite(&self, id: PropertyId) -> bool {
        self.favorites.contains(&id)
    }

    pub fn favorite_count(&self) -> usize {
        self.favorites.len()
    }

    /// Membership toggle; returns whether the property is a favorite after
    /// the call. Two calls in a row restore the original state.
    pub fn toggle_favorite(&mut self, id: PropertyId) -> bool {
        if !self.favorites.remove(&id) {
            self.favorites.insert(id);
            return true;
        }
        false
    }

    /// Dispatches a click to exactly one handler. Returns false for ids the
    /// list does not render. Action notices name the targeted property.
    pub fn click(&mut self, id: PropertyId, target: CardClick, center: &NotificationCenter) -> bool {
        let Some(title) = self
            .properties
            .iter()
            .find(|property| property.id == id)
            .map(|property| property.title)
        else {
            return false;
        };

        match target {
            CardClick::Card => {
                center.notify(card_stub("Ver propiedad", title));
            }
            CardClick::FavoriteControl => {
                self.toggle_favorite(id);
            }
            CardClick::DetailsButton => {
                center.notify(card_stub("Detalles", title));
            }
        }
        true
    }

    pub fn views(&self) -> Vec<PropertyCardView> {
        self.properties
            .iter()
            .map(|property| property.to_view(self.is_favorite(property.id)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::featured_properties;

    fn list() -> PropertyCardList {
        PropertyCardList::new(featured_properties())
    }

    #[test]
    fn toggle_twice_is_an_involution() {
        let mut cards = list();
        let id = PropertyId(1);

        assert!(cards.toggle_favorite(id));
        assert!(cards.is_favorite(id));
        assert!(!cards.toggle_favorite(id));
        assert!(!cards.is_favorite(id));
        assert_eq!(cards.favorite_count(), 0);
    }

    #[test]
    fn favorite_click_toggles_without_raising_card_action() {
        let center = NotificationCenter::new();
        let mut cards = list();
        let id = PropertyId(2);

        assert!(cards.click(id, CardClick::FavoriteControl, &center));

        assert!(cards.is_favorite(id));
        assert_eq!(center.active_count(), 0, "favorite swallows the click");
    }

    #[test]
    fn card_click_raises_action_without_touching_favorites() {
        let center = NotificationCenter::new();
        let mut cards = list();
        let id = PropertyId(3);

        assert!(cards.click(id, CardClick::Card, &center));

        assert!(!cards.is_favorite(id));
        let stack = center.active();
        assert_eq!(stack.len(), 1);
        assert_eq!(stack[0].title, "🚧 Ver propiedad no implementado");
        assert!(
            stack[0].description.contains("Penthouse de Lujo en Vitacura"),
            "the notice names the targeted property"
        );
    }

    #[test]
    fn details_click_is_its_own_action() {
        let center = NotificationCenter::new();
        let mut cards = list();

        assert!(cards.click(PropertyId(4), CardClick::DetailsButton, &center));

        let stack = center.active();
        assert_eq!(stack[0].title, "🚧 Detalles no implementado");
        assert!(stack[0].description.contains("Loft Creativo en Ñuñoa"));
    }

    #[test]
    fn clicks_on_unlisted_properties_are_ignored() {
        let center = NotificationCenter::new();
        let mut cards = list();

        assert!(!cards.click(PropertyId(99), CardClick::Card, &center));
        assert_eq!(center.active_count(), 0);
    }

    #[test]
    fn views_reflect_favorite_membership() {
        let mut cards = list();
        cards.toggle_favorite(PropertyId(1));

        let views = cards.views();
        assert!(views[0].is_favorite);
        assert!(views[1..].iter().all(|view| !view.is_favorite));
    }
}
