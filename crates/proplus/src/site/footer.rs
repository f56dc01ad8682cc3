use super::{next_component_id, ComponentId};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FooterLink {
    pub name: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FooterSection {
    pub title: &'static str,
    pub links: Vec<FooterLink>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialIcon {
    Facebook,
    Twitter,
    Instagram,
    Linkedin,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SocialLink {
    pub name: &'static str,
    pub icon: SocialIcon,
    pub href: &'static str,
}

/// Static footer frame. Purely presentational; like the navbar it is built
/// once and survives every route transition.
#[derive(Debug)]
pub struct Footer {
    id: ComponentId,
}

impl Footer {
    pub(crate) fn new() -> Self {
        Self {
            id: next_component_id(),
        }
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn sections() -> Vec<FooterSection> {
        vec![
            FooterSection {
                title: "Servicios",
                links: vec![
                    FooterLink {
                        name: "Comprar Propiedades",
                        href: "/comprar",
                    },
                    FooterLink {
                        name: "Arrendar Propiedades",
                        href: "/arrendar",
                    },
                    FooterLink {
                        name: "Valoración Gratuita",
                        href: "/valoracion",
                    },
                    FooterLink {
                        name: "Asesoría Legal",
                        href: "/asesoria",
                    },
                ],
            },
            FooterSection {
                title: "Empresa",
                links: vec![
                    FooterLink {
                        name: "Sobre Nosotros",
                        href: "/about",
                    },
                    FooterLink {
                        name: "Nuestros Agentes",
                        href: "/agentes",
                    },
                    FooterLink {
                        name: "Carreras",
                        href: "/careers",
                    },
                    FooterLink {
                        name: "Blog",
                        href: "/blog",
                    },
                ],
            },
            FooterSection {
                title: "Soporte",
                links: vec![
                    FooterLink {
                        name: "Centro de Ayuda",
                        href: "/help",
                    },
                    FooterLink {
                        name: "Contacto",
                        href: "/contact",
                    },
                    FooterLink {
                        name: "Términos de Servicio",
                        href: "/terms",
                    },
                    FooterLink {
                        name: "Política de Privacidad",
                        href: "/privacy",
                    },
                ],
            },
        ]
    }

    pub fn social_links() -> Vec<SocialLink> {
        vec![
            SocialLink {
                name: "Facebook",
                icon: SocialIcon::Facebook,
                href: "#",
            },
            SocialLink {
                name: "Twitter",
                icon: SocialIcon::Twitter,
                href: "#",
            },
            SocialLink {
                name: "Instagram",
                icon: SocialIcon::Instagram,
                href: "#",
            },
            SocialLink {
                name: "LinkedIn",
                icon: SocialIcon::Linkedin,
                href: "#",
            },
        ]
    }

    pub fn view(&self, brand: &str) -> FooterView {
        FooterView {
            brand: brand.to_string(),
            tagline: "Tu socio de confianza en el mercado inmobiliario. Conectamos sueños con hogares perfectos desde 2020.",
            phone: "+56 9 1234 5678",
            email: "contacto@proplus.cl",
            address: "Santiago, Chile",
            sections: Self::sections(),
            social: Self::social_links(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FooterView {
    pub brand: String,
    pub tagline: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub address: &'static str,
    pub sections: Vec<FooterSection>,
    pub social: Vec<SocialLink>,
}
