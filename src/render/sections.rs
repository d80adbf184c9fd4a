//! Markup for the navigation bar, the five sections and the footer.
//!
//! Every navigation trigger carries `data-nav="<section id>"`; the nav
//! buttons additionally carry `data-nav-item` so the runtime knows which
//! elements to highlight.

use std::fmt::{self, Write};

use super::html::{escape, image_url, markdown};
use crate::content::{
    About, CallToAction, ContactSection, Content, Footer, GallerySection, Hero, MenuSection,
    SectionId, group_thousands,
};

/// `class="..."` plus `aria-current` for a nav item.
fn nav_item_attrs(base: &str, id: SectionId, active: SectionId) -> String {
    match (id == active, base.is_empty()) {
        (true, true) => r#" class="active" aria-current="true""#.to_string(),
        (true, false) => format!(r#" class="{base} active" aria-current="true""#),
        (false, true) => String::new(),
        (false, false) => format!(r#" class="{base}""#),
    }
}

/// A call-to-action: a nav trigger when it targets a section, inert otherwise.
fn action(out: &mut String, cta: &CallToAction, class: &str) -> fmt::Result {
    let label = escape(&cta.label);
    match cta.section() {
        Some(id) => writeln!(
            out,
            r##"<a class="{class}" href="#{id}" data-nav="{id}">{label}</a>"##
        ),
        None => writeln!(out, r#"<button type="button" class="{class}">{label}</button>"#),
    }
}

pub(super) fn nav(out: &mut String, content: &Content, active: SectionId) -> fmt::Result {
    let brand = escape(&content.brand);
    out.push_str(r#"<nav class="site-nav" aria-label="Primary">"#);
    writeln!(out, r#"<div class="container nav-bar">"#)?;
    writeln!(out, r#"<span class="brand">{brand}</span>"#)?;

    out.push_str("<div class=\"nav-links\">\n");
    for id in SectionId::ALL {
        writeln!(
            out,
            r##"<a href="#{id}" data-nav="{id}" data-nav-item{}>{}</a>"##,
            nav_item_attrs("nav-link", id, active),
            id.label()
        )?;
    }
    if !content.reserve.label.is_empty() {
        action(out, &content.reserve, "btn btn-primary")?;
    }
    out.push_str("</div>\n");

    out.push_str(
        r#"<button type="button" id="nav-toggle" class="nav-toggle" aria-controls="mobile-nav" aria-expanded="false" aria-label="Toggle navigation">&#9776;</button>"#,
    );
    out.push_str("\n</div>\n");

    out.push_str("<div id=\"mobile-nav\" class=\"mobile-nav container\">\n");
    for id in SectionId::ALL {
        writeln!(
            out,
            r##"<a href="#{id}" data-nav="{id}" data-nav-item{}>{}</a>"##,
            nav_item_attrs("", id, active),
            id.label()
        )?;
    }
    if !content.reserve.label.is_empty() {
        action(out, &content.reserve, "btn btn-primary btn-block")?;
    }
    out.push_str("</div>\n</nav>\n");
    Ok(())
}

pub(super) fn hero(out: &mut String, hero: &Hero) -> fmt::Result {
    writeln!(out, r#"<section id="{}" class="hero">"#, SectionId::Home)?;
    if let Some(background) = &hero.background {
        // Single quotes would end the CSS string inside the attribute
        let url = image_url(background).replace('\'', "%27");
        writeln!(
            out,
            r#"<div class="hero-bg" style="background-image: url('{}')"></div>"#,
            escape(&url)
        )?;
    }
    out.push_str("<div class=\"hero-shade\"></div>\n");
    out.push_str("<div class=\"hero-content reveal\">\n");

    write!(out, "<h1>{}", escape(&hero.headline))?;
    if !hero.highlight.is_empty() {
        write!(out, r#" <span class="highlight">{}</span>"#, escape(&hero.highlight))?;
    }
    out.push_str("</h1>\n");
    if !hero.blurb.is_empty() {
        writeln!(out, "<p>{}</p>", escape(&hero.blurb))?;
    }

    if !hero.actions.is_empty() {
        out.push_str("<div class=\"hero-actions\">\n");
        for (i, cta) in hero.actions.iter().enumerate() {
            let class = if i == 0 { "btn btn-primary" } else { "btn btn-outline" };
            action(out, cta, class)?;
        }
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n<div class=\"scroll-hint\" aria-hidden=\"true\"></div>\n</section>\n");
    Ok(())
}

pub(super) fn about(out: &mut String, about: &About) -> fmt::Result {
    writeln!(out, r#"<section id="{}" class="section">"#, SectionId::About)?;
    out.push_str("<div class=\"container about-grid\">\n<div class=\"reveal\">\n");
    writeln!(out, r#"<h2 class="heading">{}</h2>"#, escape(&about.title))?;
    if !about.story.trim().is_empty() {
        writeln!(out, r#"<div class="lead">{}</div>"#, markdown(&about.story))?;
    }

    if about.rating.is_some() || about.ranking.is_some() {
        out.push_str("<div class=\"stats\">\n");
        if let Some(rating) = &about.rating {
            let filled = rating.stars();
            writeln!(
                out,
                r#"<div class="stat hover-lift"><div class="stat-value">{:.1}</div><div class="stars" aria-label="{:.1} out of 5">{}{}</div><div class="stat-note">{} Reviews</div></div>"#,
                rating.score,
                rating.score,
                "\u{2605}".repeat(filled),
                "\u{2606}".repeat(5 - filled),
                group_thousands(rating.reviews)
            )?;
        }
        if let Some(ranking) = &about.ranking {
            writeln!(
                out,
                r#"<div class="stat hover-lift"><div class="stat-value">#{}</div><div class="stat-note">of {} Restaurants<br>in {}</div></div>"#,
                group_thousands(ranking.position),
                group_thousands(ranking.total),
                escape(&ranking.area)
            )?;
        }
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n");

    if !about.images.is_empty() {
        out.push_str("<div class=\"about-images reveal\">\n");
        for img in &about.images {
            writeln!(
                out,
                r#"<img class="hover-lift" src="{}" alt="{}" loading="lazy">"#,
                escape(&image_url(&img.image)),
                escape(&img.alt)
            )?;
        }
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n</section>\n");
    Ok(())
}

fn section_header(out: &mut String, title: &str, intro: &str) -> fmt::Result {
    out.push_str("<div class=\"section-header reveal\">\n");
    writeln!(out, r#"<h2 class="heading">{}</h2>"#, escape(title))?;
    if !intro.trim().is_empty() {
        writeln!(out, r#"<div class="lead">{}</div>"#, markdown(intro))?;
    }
    out.push_str("</div>\n");
    Ok(())
}

pub(super) fn menu(out: &mut String, menu: &MenuSection) -> fmt::Result {
    writeln!(out, r#"<section id="{}" class="section section-muted">"#, SectionId::Menu)?;
    out.push_str("<div class=\"container\">\n");
    section_header(out, &menu.title, &menu.intro)?;

    out.push_str("<div class=\"menu-scroll\">\n<div class=\"menu-columns\">\n");
    for category in menu.categories.categories() {
        writeln!(
            out,
            r#"<div class="menu-category reveal" id="{}">"#,
            category.anchor()
        )?;
        writeln!(out, "<h3>{}</h3>", escape(&category.name))?;
        for item in &category.items {
            out.push_str("<article class=\"card menu-item hover-lift\">\n");
            writeln!(
                out,
                r#"<div class="menu-item-head"><h4>{}</h4><span class="price">{}</span></div>"#,
                escape(&item.name),
                escape(&item.price)
            )?;
            if !item.description.is_empty() {
                writeln!(out, "<p>{}</p>", escape(&item.description))?;
            }
            out.push_str("</article>\n");
        }
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n</div>\n");

    if !menu.badges.is_empty() {
        out.push_str("<ul class=\"badges reveal\">\n");
        for badge in &menu.badges {
            let icon = if badge.icon.is_empty() {
                String::new()
            } else {
                format!(" badge-{}", escape(&badge.icon))
            };
            writeln!(out, r#"<li class="badge{icon}">{}</li>"#, escape(&badge.text))?;
        }
        out.push_str("</ul>\n");
    }
    out.push_str("</div>\n</section>\n");
    Ok(())
}

pub(super) fn gallery(out: &mut String, gallery: &GallerySection) -> fmt::Result {
    writeln!(out, r#"<section id="{}" class="section">"#, SectionId::Gallery)?;
    out.push_str("<div class=\"container\">\n");
    section_header(out, &gallery.title, &gallery.intro)?;

    out.push_str("<div class=\"gallery-grid\">\n");
    for img in gallery.images.images() {
        writeln!(
            out,
            r#"<figure class="gallery-item reveal"><img src="{}" alt="{}" loading="lazy"></figure>"#,
            escape(&image_url(&img.image)),
            escape(&img.alt)
        )?;
    }
    out.push_str("</div>\n</div>\n</section>\n");
    Ok(())
}

pub(super) fn contact(out: &mut String, contact: &ContactSection) -> fmt::Result {
    writeln!(out, r#"<section id="{}" class="section section-muted">"#, SectionId::Contact)?;
    out.push_str("<div class=\"container\">\n");
    section_header(out, &contact.title, &contact.intro)?;

    out.push_str("<div class=\"contact-grid\">\n<div class=\"card hover-lift reveal\">\n");
    out.push_str("<dl class=\"contact-list\">\n");
    let lines = |lines: &[String]| {
        lines
            .iter()
            .map(|line| escape(line))
            .collect::<Vec<_>>()
            .join("<br>")
    };
    if !contact.address.is_empty() {
        writeln!(out, "<div><dt>Address</dt><dd>{}</dd></div>", lines(&contact.address))?;
    }
    if !contact.phone.is_empty() {
        let tel: String = contact
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        writeln!(
            out,
            r#"<div><dt>Phone</dt><dd><a href="tel:{tel}">{}</a></dd></div>"#,
            escape(&contact.phone)
        )?;
    }
    if !contact.hours.is_empty() {
        writeln!(out, "<div><dt>Hours</dt><dd>{}</dd></div>", lines(&contact.hours))?;
    }
    out.push_str("</dl>\n");
    if !contact.reservation.label.is_empty() {
        action(out, &contact.reservation, "btn btn-primary btn-block")?;
    }
    out.push_str("</div>\n");

    out.push_str("<div class=\"map-placeholder hover-lift reveal\">\n<p><strong>Interactive Map</strong></p>\n");
    if !contact.map_caption.is_empty() {
        writeln!(out, "<p>{}</p>", escape(&contact.map_caption))?;
    }
    out.push_str("</div>\n</div>\n</div>\n</section>\n");
    Ok(())
}

pub(super) fn footer(out: &mut String, content: &Content) -> fmt::Result {
    let Footer {
        tagline,
        hours_summary,
        copyright,
        socials,
    } = &content.footer;

    out.push_str("<footer class=\"site-footer\">\n<div class=\"container\">\n<div class=\"footer-grid\">\n");

    out.push_str("<div class=\"reveal\">\n");
    writeln!(out, "<h3>{}</h3>", escape(&content.brand))?;
    if !tagline.is_empty() {
        writeln!(out, "<p>{}</p>", escape(tagline))?;
    }
    if !socials.is_empty() {
        out.push_str("<div class=\"socials\">\n");
        for social in socials {
            writeln!(
                out,
                r#"<a href="{}" rel="noopener" target="_blank">{}</a>"#,
                escape(&social.url),
                escape(&social.name)
            )?;
        }
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n");

    out.push_str("<nav class=\"quick-links reveal\" aria-label=\"Quick links\">\n<h4>Quick Links</h4>\n");
    for id in SectionId::ALL {
        writeln!(out, r##"<a href="#{id}" data-nav="{id}">{}</a>"##, id.label())?;
    }
    out.push_str("</nav>\n");

    let contact = &content.contact;
    out.push_str("<div class=\"footer-info reveal\">\n<h4>Contact Info</h4>\n");
    for line in &contact.address {
        writeln!(out, "<p>{}</p>", escape(line))?;
    }
    if !contact.phone.is_empty() {
        writeln!(out, "<p>{}</p>", escape(&contact.phone))?;
    }
    if !hours_summary.is_empty() {
        writeln!(out, "<p>{}</p>", escape(hours_summary))?;
    }
    out.push_str("</div>\n</div>\n");

    if !copyright.is_empty() {
        writeln!(out, r#"<p class="copyright">{}</p>"#, escape(copyright))?;
    }
    out.push_str("</div>\n</footer>\n");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_item_attrs() {
        assert_eq!(
            nav_item_attrs("nav-link", SectionId::Home, SectionId::Home),
            r#" class="nav-link active" aria-current="true""#
        );
        assert_eq!(
            nav_item_attrs("nav-link", SectionId::Menu, SectionId::Home),
            r#" class="nav-link""#
        );
        assert_eq!(nav_item_attrs("", SectionId::Menu, SectionId::Home), "");
    }

    #[test]
    fn test_action_inert_or_linked() {
        let mut out = String::new();
        action(&mut out, &CallToAction::inert("Reserve Table"), "btn").unwrap();
        assert_eq!(out, "<button type=\"button\" class=\"btn\">Reserve Table</button>\n");

        out.clear();
        action(&mut out, &CallToAction::to_section("View Menu", SectionId::Menu), "btn").unwrap();
        assert_eq!(out, "<a class=\"btn\" href=\"#menu\" data-nav=\"menu\">View Menu</a>\n");
    }

    #[test]
    fn test_unknown_target_renders_inert() {
        let cta = CallToAction {
            label: "Book".into(),
            target: Some("booking".into()),
        };
        let mut out = String::new();
        action(&mut out, &cta, "btn").unwrap();
        assert!(out.starts_with("<button"));
        assert!(!out.contains("data-nav"));
    }

    #[test]
    fn test_hero_background_url() {
        let data = Hero {
            headline: "Hi".into(),
            background: Some("interior/it's.jpg".into()),
            ..Hero::default()
        };
        let mut out = String::new();
        hero(&mut out, &data).unwrap();
        assert!(out.contains("url('/assets/interior/it%27s.jpg')"));
        assert!(!out.contains("hero-actions"));
    }
}
