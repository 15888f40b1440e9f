//! Markup generators for each content section.
//!
//! Values are written verbatim: content comes from the site owner and plan
//! features carry intentional inline HTML.

use crate::content::{Hero, HeroSlide, Navigation, Portfolio, Pricing, SlideKind};

pub fn render_logo(nav: &Navigation) -> String {
    format!("{}<span class=\"dot\">.</span>", nav.logo)
}

pub fn render_nav_links(nav: &Navigation) -> String {
    nav.menu_items
        .iter()
        .map(|item| {
            if item.is_button {
                format!(
                    "<a href=\"{}\" class=\"btn btn-sm btn-primary\">{}</a>",
                    item.href, item.text
                )
            } else {
                format!("<a href=\"{}\">{}</a>", item.href, item.text)
            }
        })
        .collect()
}

/// `TITLE <span class="text-neon">HIGHLIGHT</span>`
pub fn render_section_title(title: &str, highlight: &str) -> String {
    format!("{} <span class=\"text-neon\">{}</span>", title, highlight)
}

fn slide_body(slide: &HeroSlide) -> String {
    format!(
        r#"
    <div class="container slide-content">
        <h1 data-aos="fade-up">{title} <span class="text-neon">{highlight}</span></h1>
        <p data-aos="fade-up" data-aos-delay="100">{description}</p>
        <div class="hero-btns" data-aos="fade-up" data-aos-delay="200">
            <a href="{link}" class="btn btn-primary">{button}</a>
        </div>
    </div>
"#,
        title = slide.title,
        highlight = slide.title_highlight,
        description = slide.description,
        link = slide.button_link,
        button = slide.button_text,
    )
}

/// One `div.slide` per slide; the first is marked `active`.
pub fn render_hero_slides(hero: &Hero) -> String {
    hero.slides
        .iter()
        .enumerate()
        .map(|(index, slide)| {
            let class = if index == 0 { "slide active" } else { "slide" };
            match slide.kind {
                SlideKind::Video => format!(
                    r#"<div class="{class}">
    <video autoplay muted loop playsinline style="position: absolute; width: 100%; height: 100%; object-fit: cover; z-index: -1;">
        <source src="{src}" type="video/mp4">
    </video>
    <div style="position: absolute; top: 0; left: 0; width: 100%; height: 100%; background: linear-gradient(rgba(0,0,0,0.7), rgba(0,0,0,0.9));"></div>{body}</div>
"#,
                    class = class,
                    src = slide.background,
                    body = slide_body(slide),
                ),
                SlideKind::Image => format!(
                    r#"<div class="{class}" style="background-image: linear-gradient(rgba(0,0,0,0.7), rgba(0,0,0,0.9)), url('{src}');">{body}</div>
"#,
                    class = class,
                    src = slide.background,
                    body = slide_body(slide),
                ),
            }
        })
        .collect()
}

pub fn render_video_grid(portfolio: &Portfolio) -> String {
    portfolio
        .videos
        .iter()
        .enumerate()
        .map(|(index, video)| {
            format!(
                r#"<div class="video-item" data-aos="flip-left" data-aos-delay="{delay}" onclick="openModal('{url}')">
    <div class="overlay">
        <i class="far fa-play-circle"></i>
        <h4>{title}</h4>
    </div>
    <div class="thumb-placeholder"></div>
</div>
"#,
                delay = index * 100,
                url = video.video_url,
                title = video.title,
            )
        })
        .collect()
}

pub fn render_pricing_grid(pricing: &Pricing) -> String {
    pricing
        .plans
        .iter()
        .enumerate()
        .map(|(index, plan)| {
            let card_class = if plan.featured { "card featured" } else { "card" };
            let badge = if plan.featured {
                "\n    <div class=\"badge\">ESTRATEGIA</div>"
            } else {
                ""
            };
            let button_class = if plan.featured { "btn-primary" } else { "btn-outline" };
            let features: String = plan
                .features
                .iter()
                .map(|f| format!("<li>{}</li>", f))
                .collect();
            format!(
                r##"<div class="{card_class}" data-aos="fade-up" data-aos-delay="{delay}">{badge}
    <div class="card-header">
        <h3>{name}</h3>
        <span class="price">{price}</span>
        <p class="payment-type">{payment}</p>
    </div>
    <div class="card-body">
        <ul class="detailed-list">{features}</ul>
    </div>
    <div class="card-footer">
        <a href="#contacto" class="btn {button_class}" onclick="preselect('{name}')">{button}</a>
    </div>
</div>
"##,
                card_class = card_class,
                delay = index * 100,
                badge = badge,
                name = plan.name,
                price = plan.price,
                payment = plan.payment_type,
                features = features,
                button_class = button_class,
                button = plan.button_text,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Content, MenuItem};

    #[test]
    fn logo_gets_dot() {
        let c = Content::default();
        assert_eq!(
            render_logo(&c.navigation),
            "SERMULTIMEDIA<span class=\"dot\">.</span>"
        );
    }

    #[test]
    fn nav_buttons_get_button_classes() {
        let nav = Navigation {
            logo: "X".into(),
            menu_items: vec![
                MenuItem { text: "Web".into(), href: "#web".into(), is_button: false },
                MenuItem { text: "Cotizar".into(), href: "#contacto".into(), is_button: true },
            ],
        };
        assert_eq!(
            render_nav_links(&nav),
            "<a href=\"#web\">Web</a><a href=\"#contacto\" class=\"btn btn-sm btn-primary\">Cotizar</a>"
        );
    }

    #[test]
    fn only_first_slide_is_active() {
        let html = render_hero_slides(&Content::default().hero);
        assert_eq!(html.matches("class=\"slide active\"").count(), 1);
        assert_eq!(html.matches("class=\"slide\"").count(), 1);
        assert!(html.contains("url('assets/bg-web.jpg')"));
    }

    #[test]
    fn video_slide_embeds_source() {
        let mut hero = Content::default().hero;
        hero.slides[0].kind = SlideKind::Video;
        hero.slides[0].background = "assets/reel.mp4".into();
        let html = render_hero_slides(&hero);
        assert!(html.contains("<source src=\"assets/reel.mp4\" type=\"video/mp4\">"));
        assert!(html.contains("autoplay muted loop playsinline"));
    }

    #[test]
    fn empty_sections_render_nothing() {
        let mut c = Content::default();
        c.portfolio.videos.clear();
        c.pricing.plans.clear();
        assert_eq!(render_video_grid(&c.portfolio), "");
        assert_eq!(render_pricing_grid(&c.pricing), "");
    }

    #[test]
    fn features_keep_inline_html() {
        let html = render_pricing_grid(&Content::default().pricing);
        assert!(html.contains("<li>🎬 <strong>5 Videos Verticales</strong>.</li>"));
        assert_eq!(html.matches("ESTRATEGIA").count(), 1);
        assert!(html.contains("data-aos-delay=\"100\""));
    }
}
