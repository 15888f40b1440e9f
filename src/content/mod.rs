//! Editable page content
//!
//! [`Content`] is one object with five fixed sections. Records inside a
//! section have no identifiers; editors address them by position. The object
//! is always persisted whole under a single key (see [`ContentStore`]).

pub mod store;

pub use store::ContentStore;

use serde::{Deserialize, Serialize};

/// The complete editable copy of the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub navigation: Navigation,
    pub hero: Hero,
    pub portfolio: Portfolio,
    pub pricing: Pricing,
    pub contact: Contact,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    pub logo: String,
    pub menu_items: Vec<MenuItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub text: String,
    pub href: String,
    #[serde(default)]
    pub is_button: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub slides: Vec<HeroSlide>,
}

/// Background media of a hero slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideKind {
    #[default]
    Image,
    Video,
}

impl SlideKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SlideKind::Image => "image",
            SlideKind::Video => "video",
        }
    }
}

impl std::str::FromStr for SlideKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "image" => Ok(SlideKind::Image),
            "video" => Ok(SlideKind::Video),
            other => Err(crate::Error::InvalidField(format!(
                "slide type must be \"image\" or \"video\", got {:?}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSlide {
    #[serde(rename = "type", default)]
    pub kind: SlideKind,
    /// Image or video URL, depending on `kind`
    pub background: String,
    pub title: String,
    pub title_highlight: String,
    pub description: String,
    pub button_text: String,
    pub button_link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub title: String,
    pub title_highlight: String,
    pub videos: Vec<PortfolioVideo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioVideo {
    pub title: String,
    pub video_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    pub title: String,
    pub title_highlight: String,
    pub plans: Vec<PricingPlan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlan {
    pub name: String,
    pub price: String,
    pub payment_type: String,
    /// One bullet per entry; entries may contain inline HTML
    pub features: Vec<String>,
    pub button_text: String,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub whatsapp: String,
    pub instagram: String,
    pub tiktok: String,
    pub facebook: String,
    pub google_maps: String,
}

fn s(v: &str) -> String {
    v.to_string()
}

impl Default for Content {
    /// The content shipped with the site; also what "reset to defaults" restores.
    fn default() -> Self {
        Content {
            navigation: Navigation {
                logo: s("SERMULTIMEDIA"),
                menu_items: vec![
                    MenuItem { text: s("Video"), href: s("#video"), is_button: false },
                    MenuItem { text: s("Web"), href: s("#web"), is_button: false },
                    MenuItem { text: s("Gestión"), href: s("#upgrade"), is_button: false },
                    MenuItem { text: s("Cotizar"), href: s("#contacto"), is_button: true },
                ],
            },
            hero: Hero {
                slides: vec![
                    HeroSlide {
                        kind: SlideKind::Image,
                        background: s("assets/bg-video.jpg"),
                        title: s("DALE PLAY A TU NEGOCIO"),
                        title_highlight: s("SIN COMPLICACIONES"),
                        description: s("Videos Verticales (Reels/TikTok) diseñados estratégicamente para vender."),
                        button_text: s("Ver Planes Video"),
                        button_link: s("#video"),
                    },
                    HeroSlide {
                        kind: SlideKind::Image,
                        background: s("assets/bg-web.jpg"),
                        title: s("TU VITRINA DIGITAL"),
                        title_highlight: s("ABIERTA 24/7"),
                        description: s("Catálogos y Menús Web inteligentes. Sin plantillas lentas, puro código veloz."),
                        button_text: s("Ver Planes Web"),
                        button_link: s("#web"),
                    },
                ],
            },
            portfolio: Portfolio {
                title: s("PORTAFOLIO"),
                title_highlight: s("VISUAL"),
                videos: vec![
                    PortfolioVideo { title: s("Gastronomía"), video_url: s("assets/demo1.mp4") },
                    PortfolioVideo { title: s("Moda / Retail"), video_url: s("assets/demo2.mp4") },
                    PortfolioVideo { title: s("Inmobiliaria"), video_url: s("assets/demo3.mp4") },
                ],
            },
            pricing: Pricing {
                title: s("PAQUETES DE"),
                title_highlight: s("EDICIÓN"),
                plans: vec![
                    PricingPlan {
                        name: s("PLAN 1: SEMANA FULL"),
                        price: s("$340.000"),
                        payment_type: s("Pago Único"),
                        features: vec![
                            s("🎬 <strong>5 Videos Verticales</strong>."),
                            s("⏱️ Ágiles (15-30 seg)."),
                            s("🎥 1 Sesión Grabación (4h)."),
                            s("⚡ Entrega única."),
                        ],
                        button_text: s("Elegir Semana"),
                        featured: false,
                    },
                    PricingPlan {
                        name: s("PLAN 2: MES PRO 👑"),
                        price: s("$640.000"),
                        payment_type: s("Pago Único"),
                        features: vec![
                            s("🎬 <strong>12 Videos Profesionales</strong>."),
                            s("🧠 Mix: Tendencias + Ventas."),
                            s("🎥 2 Sesiones (8h total)."),
                            s("🔄 2 Entregas parciales."),
                        ],
                        button_text: s("Elegir Mes Pro"),
                        featured: true,
                    },
                ],
            },
            contact: Contact {
                whatsapp: s("+573054786001"),
                instagram: s("https://instagram.com/sergiomultimedia"),
                tiktok: s("https://tiktok.com/@sergiomultimedia"),
                facebook: s("https://facebook.com/sergiomultimedia"),
                google_maps: s("https://maps.app.goo.gl/YAGimGCwMT3m8s47A"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_content_shape() {
        let c = Content::default();
        assert_eq!(c.navigation.logo, "SERMULTIMEDIA");
        assert_eq!(c.navigation.menu_items.len(), 4);
        assert!(c.navigation.menu_items[3].is_button);
        assert_eq!(c.hero.slides.len(), 2);
        assert_eq!(c.portfolio.videos.len(), 3);
        assert_eq!(c.pricing.plans.len(), 2);
        assert!(c.pricing.plans[1].featured);
    }

    #[test]
    fn serializes_with_site_field_names() {
        let v = serde_json::to_value(Content::default()).unwrap();
        assert_eq!(v["navigation"]["menuItems"][3]["isButton"], true);
        assert_eq!(v["hero"]["slides"][0]["type"], "image");
        assert_eq!(v["hero"]["slides"][0]["titleHighlight"], "SIN COMPLICACIONES");
        assert_eq!(v["portfolio"]["videos"][0]["videoUrl"], "assets/demo1.mp4");
        assert_eq!(v["pricing"]["plans"][0]["paymentType"], "Pago Único");
        assert_eq!(v["contact"]["googleMaps"], "https://maps.app.goo.gl/YAGimGCwMT3m8s47A");
    }

    #[test]
    fn menu_item_without_is_button_is_a_link() {
        let item: MenuItem = serde_json::from_str(r##"{"text":"Video","href":"#video"}"##).unwrap();
        assert!(!item.is_button);
    }

    #[test]
    fn slide_kind_parses() {
        assert_eq!("video".parse::<SlideKind>().unwrap(), SlideKind::Video);
        assert!("gif".parse::<SlideKind>().is_err());
    }
}
