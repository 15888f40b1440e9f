//! Public page rendering
//!
//! Section renderers turn content into markup strings; [`Page`] assigns those
//! strings wholesale to the regions a template marks.

pub mod page;
pub mod sections;

pub use page::{Page, Region};
pub use sections::{
    render_hero_slides, render_logo, render_nav_links, render_pricing_grid,
    render_section_title, render_video_grid,
};

use crate::content::Content;
use crate::tracking::TrackingSettings;

/// Fill every content region of `page` from `content`.
pub fn apply_content(page: &mut Page, content: &Content) {
    page.fill(Region::Logo, render_logo(&content.navigation));
    page.fill(Region::NavLinks, render_nav_links(&content.navigation));
    page.fill(Region::HeroSlider, render_hero_slides(&content.hero));
    page.fill(
        Region::PortfolioTitle,
        render_section_title(&content.portfolio.title, &content.portfolio.title_highlight),
    );
    page.fill(Region::VideoGrid, render_video_grid(&content.portfolio));
    page.fill(
        Region::PricingTitle,
        render_section_title(&content.pricing.title, &content.pricing.title_highlight),
    );
    page.fill(Region::PricingGrid, render_pricing_grid(&content.pricing));
}

/// Fill the tracking region with the snippets of every active provider.
pub fn apply_tracking(page: &mut Page, settings: &TrackingSettings) {
    page.fill(Region::TrackingScripts, settings.inject());
}

/// Render a template with content and tracking applied.
pub fn render_site(template: &str, content: &Content, settings: &TrackingSettings) -> String {
    let mut page = Page::new(template);
    apply_content(&mut page, content);
    apply_tracking(&mut page, settings);
    page.render()
}
