use super::{page_stub, STUB_DURATION_MS};
use crate::notifications::Notification;
use serde::{Deserialize, Serialize};

/// The canonical route table. Seven paths; unknown paths have no fallback
/// page and resolve to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Home,
    Buy,
    Rent,
    Agents,
    Publish,
    Login,
    FeaturedProperties,
}

impl Route {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Home,
            Self::Buy,
            Self::Rent,
            Self::Agents,
            Self::Publish,
            Self::Login,
            Self::FeaturedProperties,
        ]
    }

    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Buy => "/comprar",
            Self::Rent => "/arrendar",
            Self::Agents => "/agentes",
            Self::Publish => "/publicar",
            Self::Login => "/login",
            Self::FeaturedProperties => "/features-properties",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = match path {
            "/" => "/",
            other => other.trim_end_matches('/'),
        };

        Self::ordered()
            .into_iter()
            .find(|route| route.path() == trimmed)
    }

    pub const fn page_title(self) -> &'static str {
        match self {
            Self::Home => "ProPlus - Tu Hogar Perfecto Te Está Esperando",
            Self::Buy => "Comprar Propiedades - ProPlus",
            Self::Rent => "Arrendar Propiedades - ProPlus",
            Self::Agents => "Nuestros Agentes - ProPlus",
            Self::Publish => "Publicar Propiedad - ProPlus",
            Self::Login => "Iniciar Sesión - ProPlus",
            Self::FeaturedProperties => "Propiedades Destacadas - ProPlus",
        }
    }

    pub const fn meta_description(self) -> &'static str {
        match self {
            Self::Home => {
                "Descubre las mejores propiedades en Santiago. Compra, arrienda o invierte en bienes raíces con ProPlus, tu socio inmobiliario de confianza."
            }
            Self::Buy => {
                "Encuentra tu propiedad ideal para comprar en Santiago. Casas, departamentos y más con ProPlus."
            }
            Self::Rent => {
                "Encuentra propiedades en arriendo en Santiago. La mejor selección de arriendos con ProPlus."
            }
            Self::Agents => {
                "Conoce a nuestro equipo de agentes inmobiliarios expertos en ProPlus. Profesionales comprometidos con tu éxito."
            }
            Self::Publish => {
                "Publica tu propiedad en ProPlus. Vende o arrienda tu inmueble con los mejores profesionales del mercado."
            }
            Self::Login => {
                "Accede a tu cuenta de ProPlus para gestionar tus propiedades favoritas y recibir alertas personalizadas."
            }
            Self::FeaturedProperties => {
                "Explora todas las propiedades destacadas en ProPlus. Encuentra tu próximo hogar con nuestro catálogo exclusivo."
            }
        }
    }

    /// Routes whose interactive features only display placeholder content.
    pub const fn is_stub(self) -> bool {
        matches!(self, Self::Buy | Self::Rent | Self::Agents | Self::Login)
    }

    /// The unconditional mount-time notice, if the route has one. Total over
    /// the route set so a new route must state its mount behavior.
    pub fn mount_notice(self) -> Option<Notification> {
        match self {
            Self::Buy | Self::Rent | Self::Agents | Self::Login => Some(page_stub()),
            Self::Publish => Some(Notification::new(
                "🚧 El formulario de publicación estará listo pronto",
                "Mientras tanto, ¡puedes solicitar esta función en tu próximo mensaje! 🚀",
                5000,
            )),
            Self::Home | Self::FeaturedProperties => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for route in Route::ordered() {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert_eq!(Route::from_path("/comprar/"), Some(Route::Buy));
        assert_eq!(Route::from_path("/"), Some(Route::Home));
    }

    #[test]
    fn unknown_paths_have_no_route() {
        assert_eq!(Route::from_path("/vender"), None);
        assert_eq!(Route::from_path(""), None);
        assert_eq!(Route::from_path("/comprar/123"), None);
    }

    #[test]
    fn stub_routes_raise_the_generic_notice() {
        for route in [Route::Buy, Route::Rent, Route::Agents, Route::Login] {
            assert!(route.is_stub());
            let notice = route.mount_notice().expect("stub routes notify on mount");
            assert_eq!(notice.duration_ms, STUB_DURATION_MS);
            assert!(notice.title.contains("no está implementada"));
        }
    }

    #[test]
    fn publish_has_its_own_longer_notice() {
        let notice = Route::Publish.mount_notice().expect("publish notifies");
        assert_eq!(notice.duration_ms, 5000);
        assert!(notice.title.contains("formulario de publicación"));
    }

    #[test]
    fn content_routes_are_silent_on_mount() {
        assert!(Route::Home.mount_notice().is_none());
        assert!(Route::FeaturedProperties.mount_notice().is_none());
    }
}
