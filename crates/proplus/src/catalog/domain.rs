use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PropertyId(pub u32);

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyCategory {
    Apartment,
    House,
    Penthouse,
    Loft,
}

impl PropertyCategory {
    pub const fn ordered() -> [Self; 4] {
        [Self::Apartment, Self::House, Self::Penthouse, Self::Loft]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Apartment => "Departamento",
            Self::House => "Casa",
            Self::Penthouse => "Penthouse",
            Self::Loft => "Loft",
        }
    }

    /// Badge styling per category. Total by construction; a new category
    /// fails to compile until it picks a badge.
    pub const fn badge(self) -> BadgeStyle {
        match self {
            Self::Apartment => BadgeStyle {
                color: BadgeColor::Blue,
                icon: BadgeIcon::Building,
            },
            Self::House => BadgeStyle {
                color: BadgeColor::Green,
                icon: BadgeIcon::Home,
            },
            Self::Penthouse => BadgeStyle {
                color: BadgeColor::Purple,
                icon: BadgeIcon::Star,
            },
            Self::Loft => BadgeStyle {
                color: BadgeColor::Pink,
                icon: BadgeIcon::Star,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeColor {
    Blue,
    Green,
    Purple,
    Pink,
}

impl BadgeColor {
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Blue => "bg-blue-600",
            Self::Green => "bg-green-600",
            Self::Purple => "bg-purple-600",
            Self::Pink => "bg-pink-600",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeIcon {
    Building,
    Home,
    Star,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgeStyle {
    pub color: BadgeColor,
    pub icon: BadgeIcon,
}

/// One listed property. Created once as static sample data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRecord {
    pub id: PropertyId,
    pub title: &'static str,
    pub category: PropertyCategory,
    pub price: &'static str,
    pub location: &'static str,
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub area_m2: u16,
    pub image: &'static str,
    pub featured: bool,
}

impl PropertyRecord {
    pub fn to_view(&self, is_favorite: bool) -> PropertyCardView {
        PropertyCardView {
            id: self.id,
            title: self.title,
            category: self.category,
            category_label: self.category.label(),
            badge: self.category.badge(),
            price: self.price,
            location: self.location,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            area_m2: self.area_m2,
            image: self.image,
            featured: self.featured,
            is_favorite,
        }
    }
}

/// Serializable card projection consumed by the display surface.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyCardView {
    pub id: PropertyId,
    pub title: &'static str,
    pub category: PropertyCategory,
    pub category_label: &'static str,
    pub badge: BadgeStyle,
    pub price: &'static str,
    pub location: &'static str,
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub area_m2: u16,
    pub image: &'static str,
    pub featured: bool,
    pub is_favorite: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AgentProfile {
    pub id: u32,
    pub name: &'static str,
    pub specialty: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub quote: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepIcon {
    Search,
    UserCheck,
    Building,
}

#[derive(Debug, Clone, Serialize)]
pub struct HowItWorksStep {
    pub icon: StepIcon,
    pub title: &'static str,
    pub description: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_a_distinct_badge_color() {
        let colors: std::collections::HashSet<BadgeColor> = PropertyCategory::ordered()
            .into_iter()
            .map(|category| category.badge().color)
            .collect();
        assert_eq!(colors.len(), 4, "badge colors must stay distinguishable");
    }

    #[test]
    fn category_labels_match_display_copy() {
        assert_eq!(PropertyCategory::Apartment.label(), "Departamento");
        assert_eq!(PropertyCategory::House.label(), "Casa");
        assert_eq!(PropertyCategory::Loft.label(), "Loft");
    }

    #[test]
    fn card_view_carries_badge_and_favorite_flag() {
        let record = PropertyRecord {
            id: PropertyId(7),
            title: "Loft de prueba",
            category: PropertyCategory::Loft,
            price: "$100.000.000",
            location: "Santiago",
            bedrooms: 1,
            bathrooms: 1,
            area_m2: 50,
            image: "https://example.com/loft.jpg",
            featured: false,
        };

        let view = record.to_view(true);
        assert!(view.is_favorite);
        assert_eq!(view.badge.color, BadgeColor::Pink);
        assert_eq!(view.badge.color.css_class(), "bg-pink-600");
        assert_eq!(view.category_label, "Loft");
    }
}
