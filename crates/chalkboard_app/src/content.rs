//! Chalked elements of the showcase page
//!
//! Only elements that consume a color intent or a filter are listed; plain
//! copy and layout live in the view layer. The list is what startup
//! validation checks against the filter catalog.

use chalkboard_filters::{CHALK_STROKE, CHALK_TEXT};
use chalkboard_theme::ColorIntent;

use crate::element::ChalkElement;

const PROJECT_INTENTS: [(&str, ColorIntent); 4] = [
    ("the-coffee-shop", ColorIntent::AccentPrimary),
    ("urban-sketchers", ColorIntent::AccentSecondary),
    ("neon-nights", ColorIntent::AccentTertiary),
    ("eco-packaging", ColorIntent::AccentQuaternary),
];

const SKILL_INTENTS: [(&str, ColorIntent); 4] = [
    ("ui-design", ColorIntent::AccentSecondary),
    ("coding", ColorIntent::AccentPrimary),
    ("illustration", ColorIntent::AccentTertiary),
    ("strategy", ColorIntent::AccentQuaternary),
];

const BLOG_INTENTS: [(&str, ColorIntent); 3] = [
    ("designing-for-dark-mode", ColorIntent::AccentPrimary),
    ("why-texture-matters", ColorIntent::AccentSecondary),
    ("simplicity", ColorIntent::AccentTertiary),
];

/// Every chalked element on the page
pub fn showcase_elements() -> Vec<ChalkElement> {
    let mut elements = vec![
        ChalkElement::new("nav.logo", ColorIntent::AccentPrimary).filter(CHALK_STROKE),
        ChalkElement::new("nav.link", ColorIntent::Neutral),
        ChalkElement::new("hero.frame", ColorIntent::Neutral)
            .filter(CHALK_STROKE)
            .stroke_width(4.0),
        ChalkElement::new("hero.star.large", ColorIntent::AccentPrimary).filter(CHALK_STROKE),
        ChalkElement::new("hero.star.small", ColorIntent::AccentTertiary).filter(CHALK_STROKE),
        ChalkElement::new("hero.title", ColorIntent::AccentPrimary)
            .filter(CHALK_TEXT)
            .stroke_width(1.0),
        ChalkElement::new("hero.highlight", ColorIntent::AccentSecondary),
        ChalkElement::new("hero.button", ColorIntent::AccentPrimary).filter(CHALK_STROKE),
        ChalkElement::new("about.underline", ColorIntent::AccentTertiary).filter(CHALK_STROKE),
        ChalkElement::new("about.polaroid", ColorIntent::Neutral).filter(CHALK_STROKE),
        ChalkElement::new("projects.rule", ColorIntent::AccentSecondary)
            .filter(CHALK_STROKE)
            .stroke_width(4.0),
    ];

    for (slug, intent) in PROJECT_INTENTS {
        elements.push(
            ChalkElement::new(format!("projects.card.{slug}"), intent).filter(CHALK_STROKE),
        );
    }
    for (slug, intent) in SKILL_INTENTS {
        elements.push(
            ChalkElement::new(format!("skills.icon.{slug}"), intent).filter(CHALK_STROKE),
        );
    }

    elements.extend([
        ChalkElement::new("experience.timeline", ColorIntent::Neutral).filter(CHALK_STROKE),
        ChalkElement::new("experience.marker", ColorIntent::AccentPrimary),
        ChalkElement::new("services.bullet", ColorIntent::AccentSecondary)
            .filter(CHALK_STROKE)
            .stroke_width(8.0),
        ChalkElement::new("testimonial.box", ColorIntent::Neutral).filter(CHALK_STROKE),
        ChalkElement::new("testimonial.rule", ColorIntent::AccentTertiary).filter(CHALK_STROKE),
    ]);

    for (slug, intent) in BLOG_INTENTS {
        elements.push(
            ChalkElement::new(format!("blog.title.{slug}"), intent)
                .filter(CHALK_TEXT)
                .stroke_width(1.0),
        );
    }

    elements.extend([
        // Hairline: the stroke wobble would swallow a 1px rule.
        ChalkElement::new("blog.divider", ColorIntent::Neutral)
            .filter(CHALK_TEXT)
            .stroke_width(1.0),
        ChalkElement::new("contact.input", ColorIntent::Neutral).filter(CHALK_STROKE),
        ChalkElement::new("contact.send", ColorIntent::AccentSecondary).filter(CHALK_STROKE),
        ChalkElement::new("footer.icon", ColorIntent::Neutral).filter(CHALK_STROKE),
    ]);

    elements
}
