use std::collections::BTreeMap;
use std::fmt;

const MARKER_PREFIX: &str = "<!-- mediasite:";

/// A designated area of the public page whose markup is generated from
/// content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    Logo,
    NavLinks,
    HeroSlider,
    PortfolioTitle,
    VideoGrid,
    PricingTitle,
    PricingGrid,
    TrackingScripts,
}

impl Region {
    pub const ALL: [Region; 8] = [
        Region::Logo,
        Region::NavLinks,
        Region::HeroSlider,
        Region::PortfolioTitle,
        Region::VideoGrid,
        Region::PricingTitle,
        Region::PricingGrid,
        Region::TrackingScripts,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Region::Logo => "logo",
            Region::NavLinks => "nav-links",
            Region::HeroSlider => "hero-slider",
            Region::PortfolioTitle => "portfolio-title",
            Region::VideoGrid => "video-grid",
            Region::PricingTitle => "pricing-title",
            Region::PricingGrid => "pricing-grid",
            Region::TrackingScripts => "tracking-scripts",
        }
    }

    /// Placeholder a template uses to mark this region
    pub fn marker(self) -> String {
        format!("{}{} -->", MARKER_PREFIX, self.name())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A page template plus the markup assigned to its regions.
///
/// Assigning a region replaces whatever it held before. Regions the template
/// does not mark are ignored when rendering.
#[derive(Debug, Clone)]
pub struct Page {
    template: String,
    regions: BTreeMap<Region, String>,
}

impl Page {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            regions: BTreeMap::new(),
        }
    }

    pub fn has_region(&self, region: Region) -> bool {
        self.template.contains(&region.marker())
    }

    pub fn fill(&mut self, region: Region, markup: impl Into<String>) {
        self.regions.insert(region, markup.into());
    }

    pub fn region(&self, region: Region) -> Option<&str> {
        self.regions.get(&region).map(String::as_str)
    }

    /// The template with every filled region substituted.
    ///
    /// Markers are located in the template only, never in inserted markup.
    /// Unfilled markers stay in place so a later pass can still fill them.
    pub fn render(&self) -> String {
        for region in self.regions.keys() {
            if !self.has_region(*region) {
                log::debug!("render: template has no {} region, skipping", region);
            }
        }

        let mut out = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();
        while let Some(start) = rest.find(MARKER_PREFIX) {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];
            let filled = self.regions.iter().find_map(|(region, markup)| {
                let marker = region.marker();
                tail.starts_with(&marker).then(|| (marker.len(), markup))
            });
            match filled {
                Some((len, markup)) => {
                    out.push_str(markup);
                    rest = &tail[len..];
                }
                None => {
                    out.push_str(MARKER_PREFIX);
                    rest = &tail[MARKER_PREFIX.len()..];
                }
            }
        }
        out.push_str(rest);
        out
    }
}
