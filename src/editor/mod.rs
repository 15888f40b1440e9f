//! Dashboard editor mutators
//!
//! Every mutator follows the same cycle: load the full [`Content`], find the
//! element by position, change or splice it, save the full object back and
//! hand the edited list to the caller for re-rendering. A failed lookup
//! aborts before anything is written.

pub mod fields;

pub use fields::{ContactField, MenuItemField, PlanField, SlideField, VideoField};

use crate::content::{
    Content, ContentStore, HeroSlide, MenuItem, PortfolioVideo, PricingPlan, SlideKind,
};
use crate::{Error, Result};

/// Content editor backing the dashboard forms.
#[derive(Debug, Clone)]
pub struct Editor {
    store: ContentStore,
}

fn slot<'a, T>(items: &'a mut [T], index: usize, section: &'static str) -> Result<&'a mut T> {
    let len = items.len();
    items
        .get_mut(index)
        .ok_or(Error::IndexOutOfRange { section, index, len })
}

fn splice<T>(items: &mut Vec<T>, index: usize, section: &'static str) -> Result<T> {
    if index >= items.len() {
        return Err(Error::IndexOutOfRange {
            section,
            index,
            len: items.len(),
        });
    }
    Ok(items.remove(index))
}

impl Editor {
    pub fn new(store: ContentStore) -> Self {
        Self { store }
    }

    /// Current content, for populating the editor forms.
    pub fn load(&self) -> Content {
        self.store.load()
    }

    /// Load, apply `f`, save. Nothing is written if `f` fails.
    fn edit<R>(&self, f: impl FnOnce(&mut Content) -> Result<R>) -> Result<R> {
        let mut content = self.store.load();
        let out = f(&mut content)?;
        if !self.store.save(&content) {
            return Err(Error::Storage("failed to persist site content".into()));
        }
        Ok(out)
    }

    // --- navigation ---

    pub fn set_logo(&self, logo: &str) -> Result<()> {
        self.edit(|c| {
            c.navigation.logo = logo.to_string();
            Ok(())
        })
    }

    pub fn add_menu_item(&self) -> Result<Vec<MenuItem>> {
        self.edit(|c| {
            c.navigation.menu_items.push(MenuItem {
                text: "Nuevo".into(),
                href: "#".into(),
                is_button: false,
            });
            Ok(c.navigation.menu_items.clone())
        })
    }

    pub fn update_menu_item(&self, index: usize, field: MenuItemField) -> Result<Vec<MenuItem>> {
        self.edit(|c| {
            field.apply(slot(&mut c.navigation.menu_items, index, "menu items")?);
            Ok(c.navigation.menu_items.clone())
        })
    }

    pub fn remove_menu_item(&self, index: usize) -> Result<Vec<MenuItem>> {
        self.edit(|c| {
            splice(&mut c.navigation.menu_items, index, "menu items")?;
            Ok(c.navigation.menu_items.clone())
        })
    }

    // --- hero ---

    pub fn add_hero_slide(&self) -> Result<Vec<HeroSlide>> {
        self.edit(|c| {
            c.hero.slides.push(HeroSlide {
                kind: SlideKind::Image,
                background: "assets/bg.jpg".into(),
                title: "NUEVO SLIDE".into(),
                title_highlight: "DESTACADO".into(),
                description: "Descripción del slide".into(),
                button_text: "Ver Más".into(),
                button_link: "#".into(),
            });
            Ok(c.hero.slides.clone())
        })
    }

    pub fn update_hero_slide(&self, index: usize, field: SlideField) -> Result<Vec<HeroSlide>> {
        self.edit(|c| {
            field.apply(slot(&mut c.hero.slides, index, "hero slides")?);
            Ok(c.hero.slides.clone())
        })
    }

    pub fn remove_hero_slide(&self, index: usize) -> Result<Vec<HeroSlide>> {
        self.edit(|c| {
            splice(&mut c.hero.slides, index, "hero slides")?;
            Ok(c.hero.slides.clone())
        })
    }

    // --- portfolio ---

    pub fn set_portfolio_titles(&self, title: &str, highlight: &str) -> Result<()> {
        self.edit(|c| {
            c.portfolio.title = title.to_string();
            c.portfolio.title_highlight = highlight.to_string();
            Ok(())
        })
    }

    pub fn add_portfolio_video(&self) -> Result<Vec<PortfolioVideo>> {
        self.edit(|c| {
            c.portfolio.videos.push(PortfolioVideo {
                title: "Nuevo Video".into(),
                video_url: "assets/video.mp4".into(),
            });
            Ok(c.portfolio.videos.clone())
        })
    }

    pub fn update_portfolio_video(
        &self,
        index: usize,
        field: VideoField,
    ) -> Result<Vec<PortfolioVideo>> {
        self.edit(|c| {
            field.apply(slot(&mut c.portfolio.videos, index, "portfolio videos")?);
            Ok(c.portfolio.videos.clone())
        })
    }

    pub fn remove_portfolio_video(&self, index: usize) -> Result<Vec<PortfolioVideo>> {
        self.edit(|c| {
            splice(&mut c.portfolio.videos, index, "portfolio videos")?;
            Ok(c.portfolio.videos.clone())
        })
    }

    // --- pricing ---

    pub fn set_pricing_titles(&self, title: &str, highlight: &str) -> Result<()> {
        self.edit(|c| {
            c.pricing.title = title.to_string();
            c.pricing.title_highlight = highlight.to_string();
            Ok(())
        })
    }

    pub fn add_pricing_plan(&self) -> Result<Vec<PricingPlan>> {
        self.edit(|c| {
            c.pricing.plans.push(PricingPlan {
                name: "NUEVO PLAN".into(),
                price: "$0".into(),
                payment_type: "Pago Único".into(),
                features: vec!["Característica 1".into(), "Característica 2".into()],
                button_text: "Elegir Plan".into(),
                featured: false,
            });
            Ok(c.pricing.plans.clone())
        })
    }

    pub fn update_pricing_plan(&self, index: usize, field: PlanField) -> Result<Vec<PricingPlan>> {
        self.edit(|c| {
            field.apply(slot(&mut c.pricing.plans, index, "pricing plans")?);
            Ok(c.pricing.plans.clone())
        })
    }

    pub fn remove_pricing_plan(&self, index: usize) -> Result<Vec<PricingPlan>> {
        self.edit(|c| {
            splice(&mut c.pricing.plans, index, "pricing plans")?;
            Ok(c.pricing.plans.clone())
        })
    }

    // --- contact ---

    pub fn update_contact(&self, field: ContactField) -> Result<()> {
        self.edit(|c| {
            field.apply(&mut c.contact);
            Ok(())
        })
    }

    /// Overwrite everything with [`Content::default`].
    pub fn reset_to_defaults(&self) -> Result<Content> {
        if !self.store.reset_to_defaults() {
            return Err(Error::Storage("failed to persist site content".into()));
        }
        Ok(Content::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;

    fn editor() -> Editor {
        Editor::new(ContentStore::new(Storage::in_memory()))
    }

    #[test]
    fn add_menu_item_appends_default_link() {
        let e = editor();
        let before = e.load().navigation.menu_items.len();
        let items = e.add_menu_item().unwrap();
        assert_eq!(items.len(), before + 1);
        assert_eq!(
            items.last().unwrap(),
            &MenuItem { text: "Nuevo".into(), href: "#".into(), is_button: false }
        );
        assert_eq!(e.load().navigation.menu_items, items);
    }

    #[test]
    fn remove_preserves_order() {
        let e = editor();
        let before = e.load().portfolio.videos;
        let after = e.remove_portfolio_video(1).unwrap();
        assert_eq!(after.len(), before.len() - 1);
        assert_eq!(after[0], before[0]);
        assert_eq!(after[1], before[2]);
        assert!(!after.contains(&before[1]));
    }

    #[test]
    fn out_of_range_writes_nothing() {
        let e = editor();
        let storage = e.store.storage().clone();
        let err = e.remove_hero_slide(9).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfRange { index: 9, len: 2, .. }));
        assert!(storage.get_raw(crate::storage::SITE_CONTENT_KEY).is_none());

        let err = e
            .update_pricing_plan(5, PlanField::Featured(true))
            .unwrap_err();
        assert!(matches!(err, Error::IndexOutOfRange { section: "pricing plans", .. }));
    }

    #[test]
    fn updates_single_field() {
        let e = editor();
        e.update_hero_slide(0, SlideField::Kind(SlideKind::Video)).unwrap();
        e.update_menu_item(1, MenuItemField::Text("Webs".into())).unwrap();
        let c = e.load();
        assert_eq!(c.hero.slides[0].kind, SlideKind::Video);
        assert_eq!(c.hero.slides[0].title, "DALE PLAY A TU NEGOCIO");
        assert_eq!(c.navigation.menu_items[1].text, "Webs");
        assert_eq!(c.navigation.menu_items[1].href, "#web");
    }

    #[test]
    fn titles_and_contact() {
        let e = editor();
        e.set_logo("ACME").unwrap();
        e.set_portfolio_titles("TRABAJOS", "RECIENTES").unwrap();
        e.set_pricing_titles("PLANES", "2026").unwrap();
        e.update_contact(ContactField::Whatsapp("+570000000000".into()))
            .unwrap();
        let c = e.load();
        assert_eq!(c.navigation.logo, "ACME");
        assert_eq!(c.portfolio.title_highlight, "RECIENTES");
        assert_eq!(c.pricing.title, "PLANES");
        assert_eq!(c.contact.whatsapp, "+570000000000");
    }

    #[test]
    fn add_plan_and_slide_defaults() {
        let e = editor();
        let plans = e.add_pricing_plan().unwrap();
        let plan = plans.last().unwrap();
        assert_eq!(plan.name, "NUEVO PLAN");
        assert_eq!(plan.features.len(), 2);
        assert!(!plan.featured);

        let slides = e.add_hero_slide().unwrap();
        assert_eq!(slides.last().unwrap().background, "assets/bg.jpg");
        let videos = e.add_portfolio_video().unwrap();
        assert_eq!(videos.last().unwrap().video_url, "assets/video.mp4");
    }

    #[test]
    fn reset_restores_defaults() {
        let e = editor();
        e.remove_menu_item(0).unwrap();
        assert_eq!(e.reset_to_defaults().unwrap(), Content::default());
        assert_eq!(e.load(), Content::default());
    }

    mod removal {
        use super::*;
        use proptest::collection::vec;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn removing_any_index_keeps_the_rest_in_order(
                titles in vec("[a-z]{1,8}", 1..8),
            ) {
                for index in 0..titles.len() {
                    let e = editor();
                    let mut content = e.load();
                    content.portfolio.videos = titles
                        .iter()
                        .map(|t| PortfolioVideo { title: t.clone(), video_url: format!("{}.mp4", t) })
                        .collect();
                    prop_assert!(e.store.save(&content));

                    let after = e.remove_portfolio_video(index).unwrap();
                    let mut expected = content.portfolio.videos.clone();
                    expected.remove(index);
                    prop_assert_eq!(after.len(), titles.len() - 1);
                    prop_assert_eq!(&after, &expected);
                    prop_assert_eq!(e.load().portfolio.videos, expected);
                }
            }

            #[test]
            fn removing_past_the_end_changes_nothing(
                count in 0..6usize,
                past in 0..4usize,
            ) {
                let e = editor();
                let mut content = e.load();
                content.navigation.menu_items.truncate(count.min(content.navigation.menu_items.len()));
                prop_assert!(e.store.save(&content));
                let len = content.navigation.menu_items.len();

                let result = e.remove_menu_item(len + past);
                let is_out_of_range = matches!(result, Err(Error::IndexOutOfRange { .. }));
                prop_assert!(is_out_of_range);
                prop_assert_eq!(e.load(), content);
            }
        }
    }
}
