//! Single-field updates, as submitted by the dashboard forms.
//!
//! Each enum carries one field's new value. `parse` turns the form's
//! `(field name, text)` pair into the typed update; booleans accept
//! `true`/`false`, plan features are one entry per line.

use crate::content::{Contact, HeroSlide, MenuItem, PortfolioVideo, PricingPlan, SlideKind};
use crate::{Error, Result};

fn parse_bool(field: &str, value: &str) -> Result<bool> {
    match value.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(Error::InvalidField(format!(
            "{} expects true or false, got {:?}",
            field, other
        ))),
    }
}

fn unknown(section: &str, field: &str) -> Error {
    Error::InvalidField(format!("{} has no field {:?}", section, field))
}

#[derive(Debug, Clone, PartialEq)]
pub enum MenuItemField {
    Text(String),
    Href(String),
    IsButton(bool),
}

impl MenuItemField {
    pub fn parse(field: &str, value: &str) -> Result<Self> {
        Ok(match field {
            "text" => Self::Text(value.to_string()),
            "href" => Self::Href(value.to_string()),
            "isButton" => Self::IsButton(parse_bool(field, value)?),
            _ => return Err(unknown("menu item", field)),
        })
    }

    pub(crate) fn apply(self, item: &mut MenuItem) {
        match self {
            Self::Text(v) => item.text = v,
            Self::Href(v) => item.href = v,
            Self::IsButton(v) => item.is_button = v,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SlideField {
    Kind(SlideKind),
    Background(String),
    Title(String),
    TitleHighlight(String),
    Description(String),
    ButtonText(String),
    ButtonLink(String),
}

impl SlideField {
    pub fn parse(field: &str, value: &str) -> Result<Self> {
        Ok(match field {
            "type" => Self::Kind(value.parse()?),
            "background" => Self::Background(value.to_string()),
            "title" => Self::Title(value.to_string()),
            "titleHighlight" => Self::TitleHighlight(value.to_string()),
            "description" => Self::Description(value.to_string()),
            "buttonText" => Self::ButtonText(value.to_string()),
            "buttonLink" => Self::ButtonLink(value.to_string()),
            _ => return Err(unknown("hero slide", field)),
        })
    }

    pub(crate) fn apply(self, slide: &mut HeroSlide) {
        match self {
            Self::Kind(v) => slide.kind = v,
            Self::Background(v) => slide.background = v,
            Self::Title(v) => slide.title = v,
            Self::TitleHighlight(v) => slide.title_highlight = v,
            Self::Description(v) => slide.description = v,
            Self::ButtonText(v) => slide.button_text = v,
            Self::ButtonLink(v) => slide.button_link = v,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum VideoField {
    Title(String),
    VideoUrl(String),
}

impl VideoField {
    pub fn parse(field: &str, value: &str) -> Result<Self> {
        Ok(match field {
            "title" => Self::Title(value.to_string()),
            "videoUrl" => Self::VideoUrl(value.to_string()),
            _ => return Err(unknown("portfolio video", field)),
        })
    }

    pub(crate) fn apply(self, video: &mut PortfolioVideo) {
        match self {
            Self::Title(v) => video.title = v,
            Self::VideoUrl(v) => video.video_url = v,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlanField {
    Name(String),
    Price(String),
    PaymentType(String),
    Features(Vec<String>),
    ButtonText(String),
    Featured(bool),
}

impl PlanField {
    pub fn parse(field: &str, value: &str) -> Result<Self> {
        Ok(match field {
            "name" => Self::Name(value.to_string()),
            "price" => Self::Price(value.to_string()),
            "paymentType" => Self::PaymentType(value.to_string()),
            "features" => Self::Features(value.split('\n').map(str::to_string).collect()),
            "buttonText" => Self::ButtonText(value.to_string()),
            "featured" => Self::Featured(parse_bool(field, value)?),
            _ => return Err(unknown("pricing plan", field)),
        })
    }

    pub(crate) fn apply(self, plan: &mut PricingPlan) {
        match self {
            Self::Name(v) => plan.name = v,
            Self::Price(v) => plan.price = v,
            Self::PaymentType(v) => plan.payment_type = v,
            Self::Features(v) => plan.features = v,
            Self::ButtonText(v) => plan.button_text = v,
            Self::Featured(v) => plan.featured = v,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContactField {
    Whatsapp(String),
    Instagram(String),
    Tiktok(String),
    Facebook(String),
    GoogleMaps(String),
}

impl ContactField {
    pub fn parse(field: &str, value: &str) -> Result<Self> {
        Ok(match field {
            "whatsapp" => Self::Whatsapp(value.to_string()),
            "instagram" => Self::Instagram(value.to_string()),
            "tiktok" => Self::Tiktok(value.to_string()),
            "facebook" => Self::Facebook(value.to_string()),
            "googleMaps" => Self::GoogleMaps(value.to_string()),
            _ => return Err(unknown("contact", field)),
        })
    }

    pub(crate) fn apply(self, contact: &mut Contact) {
        match self {
            Self::Whatsapp(v) => contact.whatsapp = v,
            Self::Instagram(v) => contact.instagram = v,
            Self::Tiktok(v) => contact.tiktok = v,
            Self::Facebook(v) => contact.facebook = v,
            Self::GoogleMaps(v) => contact.google_maps = v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_form_pairs() {
        assert_eq!(
            MenuItemField::parse("isButton", "true").unwrap(),
            MenuItemField::IsButton(true)
        );
        assert_eq!(
            SlideField::parse("type", "video").unwrap(),
            SlideField::Kind(SlideKind::Video)
        );
        assert_eq!(
            PlanField::parse("features", "one\ntwo").unwrap(),
            PlanField::Features(vec!["one".into(), "two".into()])
        );
        assert_eq!(
            ContactField::parse("googleMaps", "https://maps.example").unwrap(),
            ContactField::GoogleMaps("https://maps.example".into())
        );
    }

    #[test]
    fn rejects_unknown_fields_and_bad_booleans() {
        assert!(matches!(MenuItemField::parse("color", "red"), Err(Error::InvalidField(_))));
        assert!(matches!(PlanField::parse("featured", "yes"), Err(Error::InvalidField(_))));
        assert!(matches!(SlideField::parse("type", "gif"), Err(Error::InvalidField(_))));
        assert!(VideoField::parse("url", "x").is_err());
    }
}
