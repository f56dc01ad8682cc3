use super::domain::{
    AgentProfile, HowItWorksStep, PropertyCategory, PropertyId, PropertyRecord, StepIcon,
    Testimonial,
};

/// The exclusive selection shown on the home page.
pub fn featured_properties() -> Vec<PropertyRecord> {
    listed_properties()
        .into_iter()
        .filter(|property| property.featured)
        .collect()
}

/// The full catalog rendered on the featured-properties page.
pub fn listed_properties() -> Vec<PropertyRecord> {
    vec![
        PropertyRecord {
            id: PropertyId(1),
            title: "Departamento Moderno en Las Condes",
            category: PropertyCategory::Apartment,
            price: "$450.000.000",
            location: "Las Condes, Santiago",
            bedrooms: 3,
            bathrooms: 2,
            area_m2: 120,
            image: "https://images.unsplash.com/photo-1506744038136-46273834b3fb?auto=format&fit=crop&w=600&q=80",
            featured: true,
        },
        PropertyRecord {
            id: PropertyId(2),
            title: "Casa Familiar en Providencia",
            category: PropertyCategory::House,
            price: "$680.000.000",
            location: "Providencia, Santiago",
            bedrooms: 4,
            bathrooms: 3,
            area_m2: 180,
            image: "https://images.unsplash.com/photo-1460518451285-97b6aa326961?auto=format&fit=crop&w=600&q=80",
            featured: true,
        },
        PropertyRecord {
            id: PropertyId(3),
            title: "Penthouse de Lujo en Vitacura",
            category: PropertyCategory::Penthouse,
            price: "$1.200.000.000",
            location: "Vitacura, Santiago",
            bedrooms: 4,
            bathrooms: 4,
            area_m2: 250,
            image: "https://images.unsplash.com/photo-1512918728675-ed5a9ecdebfd?auto=format&fit=crop&w=600&q=80",
            featured: true,
        },
        PropertyRecord {
            id: PropertyId(4),
            title: "Loft Creativo en Ñuñoa",
            category: PropertyCategory::Loft,
            price: "$320.000.000",
            location: "Ñuñoa, Santiago",
            bedrooms: 1,
            bathrooms: 1,
            area_m2: 60,
            image: "https://images.unsplash.com/photo-1465101046530-73398c7f28ca?auto=format&fit=crop&w=600&q=80",
            featured: true,
        },
        PropertyRecord {
            id: PropertyId(5),
            title: "Casa con Jardín en La Reina",
            category: PropertyCategory::House,
            price: "$540.000.000",
            location: "La Reina, Santiago",
            bedrooms: 3,
            bathrooms: 2,
            area_m2: 140,
            image: "https://images.unsplash.com/photo-1507089947368-19c1da9775ae?auto=format&fit=crop&w=600&q=80",
            featured: false,
        },
        PropertyRecord {
            id: PropertyId(6),
            title: "Departamento Familiar en Santiago Centro",
            category: PropertyCategory::Apartment,
            price: "$390.000.000",
            location: "Santiago Centro",
            bedrooms: 2,
            bathrooms: 2,
            area_m2: 90,
            image: "https://images.unsplash.com/photo-1523217582562-09d0def993a6?auto=format&fit=crop&w=600&q=80",
            featured: false,
        },
        PropertyRecord {
            id: PropertyId(7),
            title: "Penthouse Panorámico en Las Condes",
            category: PropertyCategory::Penthouse,
            price: "$1.350.000.000",
            location: "Las Condes, Santiago",
            bedrooms: 5,
            bathrooms: 5,
            area_m2: 300,
            image: "https://images.unsplash.com/photo-1503389152951-9c3d8bca6c63?auto=format&fit=crop&w=600&q=80",
            featured: false,
        },
        PropertyRecord {
            id: PropertyId(8),
            title: "Loft Minimalista en Providencia",
            category: PropertyCategory::Loft,
            price: "$310.000.000",
            location: "Providencia, Santiago",
            bedrooms: 1,
            bathrooms: 1,
            area_m2: 55,
            image: "https://images.unsplash.com/photo-1519974719765-e6559eac2575?auto=format&fit=crop&w=600&q=80",
            featured: false,
        },
        PropertyRecord {
            id: PropertyId(9),
            title: "Casa de Lujo en Vitacura",
            category: PropertyCategory::House,
            price: "$1.800.000.000",
            location: "Vitacura, Santiago",
            bedrooms: 6,
            bathrooms: 5,
            area_m2: 400,
            image: "https://images.unsplash.com/photo-1501594907352-04cda38ebc29?auto=format&fit=crop&w=600&q=80",
            featured: false,
        },
    ]
}

pub fn featured_agents() -> Vec<AgentProfile> {
    vec![
        AgentProfile {
            id: 1,
            name: "Carolina Pérez",
            specialty: "Especialista en Lofts",
            image: "Professional real estate agent woman smiling",
        },
        AgentProfile {
            id: 2,
            name: "Javier Morales",
            specialty: "Experto en Casas Familiares",
            image: "Friendly male real estate agent portrait",
        },
        AgentProfile {
            id: 3,
            name: "Sofía Castro",
            specialty: "Reina de los Penthouses",
            image: "Elegant real estate agent posing",
        },
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: 1,
            name: "Familia González",
            quote: "ProPlus hizo que comprar nuestra primera casa fuera una experiencia increíble. ¡El equipo es excepcional!",
            image: "Happy family in front of new house",
        },
        Testimonial {
            id: 2,
            name: "Martina López",
            quote: "Encontré el departamento perfecto en tiempo récord. Su plataforma es intuitiva y sus agentes, los mejores.",
            image: "Young professional woman in a modern apartment",
        },
    ]
}

pub fn how_it_works_steps() -> Vec<HowItWorksStep> {
    vec![
        HowItWorksStep {
            icon: StepIcon::Search,
            title: "Busca tu Propiedad",
            description: "Usa nuestros filtros avanzados para encontrar el hogar de tus sueños.",
        },
        HowItWorksStep {
            icon: StepIcon::UserCheck,
            title: "Contacta un Agente",
            description: "Nuestros agentes expertos te guiarán en cada paso del proceso.",
        },
        HowItWorksStep {
            icon: StepIcon::Building,
            title: "Cierra el Trato",
            description: "Disfruta de un proceso de compra seguro, rápido y transparente.",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn listing_ids_are_unique() {
        let ids: HashSet<PropertyId> = listed_properties()
            .iter()
            .map(|property| property.id)
            .collect();
        assert_eq!(ids.len(), listed_properties().len());
    }

    #[test]
    fn featured_selection_is_the_flagged_subset() {
        let featured = featured_properties();
        assert_eq!(featured.len(), 4);
        assert!(featured.iter().all(|property| property.featured));
    }

    #[test]
    fn listing_covers_every_category() {
        let categories: HashSet<PropertyCategory> = listed_properties()
            .iter()
            .map(|property| property.category)
            .collect();
        assert_eq!(categories.len(), PropertyCategory::ordered().len());
    }

    #[test]
    fn supporting_content_is_present() {
        assert_eq!(featured_agents().len(), 3);
        assert_eq!(testimonials().len(), 2);
        assert_eq!(how_it_works_steps().len(), 3);
    }
}
