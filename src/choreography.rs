//! Animation specs for each page section.
//!
//! Roles here match the `data-motion` attributes the section components put
//! on their elements. Timings and curves are in seconds and easing names.

use crate::motion::{tween, MotionError, SectionSpec, Track, VisualProps as Props, ROOT_ROLE};

/// Heading of every section except the hero.
pub const TITLE: &str = "title";

fn fade() -> Props {
    Props::new().opacity(0.0)
}

fn shown() -> Props {
    Props::new().opacity(1.0)
}

/// `-value` for even indices and `value` for odd ones.
fn alternate(index: usize, value: f64) -> f64 {
    if index % 2 == 0 {
        -value
    } else {
        value
    }
}

pub mod hero {
    use super::*;

    pub const CHAR: &str = "char";
    pub const HEADLINE: &str = "headline";
    pub const UNDERLINE: &str = "underline";
    pub const SUBHEADLINE: &str = "subheadline";
    pub const CTA: &str = "cta";
    pub const PARTICLES: &str = "particles";

    pub fn spec() -> Result<SectionSpec, MotionError> {
        SectionSpec::builder("hero")
            .intro(
                CHAR,
                tween(
                    fade().y(80.0).rotate_x(-90.0),
                    shown().y(0.0).rotate_x(0.0),
                    0.8,
                    "expo.out",
                )?
                .stagger(0.05)
                .delay(0.4),
            )
            .intro(
                UNDERLINE,
                tween(
                    Props::new().scale_x(0.0).origin("left center"),
                    Props::new().scale_x(1.0),
                    0.6,
                    "expo.out",
                )?
                .delay(1.2),
            )
            .intro(
                SUBHEADLINE,
                tween(
                    fade().y(30.0).blur(10.0),
                    shown().y(0.0).blur(0.0),
                    0.7,
                    "power2.out",
                )?
                .delay(1.0),
            )
            .intro(
                CTA,
                tween(
                    fade().scale(0.8),
                    shown().scale(1.0),
                    0.5,
                    "elastic.out(1, 0.5)",
                )?
                .delay(1.3),
            )
            .scrub("text-drift", ROOT_ROLE, "top top", "30% top", |p, frame| {
                frame.set(HEADLINE, Props::new().y(-80.0 * p).opacity(1.0 - 0.7 * p));
                frame.set(SUBHEADLINE, Props::new().y(-120.0 * p).opacity(1.0 - p));
            })
            .scrub("particles-fade", ROOT_ROLE, "top top", "50% top", |p, frame| {
                frame.set(PARTICLES, Props::new().opacity(1.0 - 0.8 * p));
            })
            .build()
    }
}

pub mod about {
    use super::*;

    pub const SHAPE: &str = "shape";
    pub const IMAGE: &str = "image";
    pub const PARAGRAPHS: &str = "paragraphs";
    pub const PARAGRAPH: &str = "paragraph";
    pub const CTA: &str = "cta";

    pub fn spec() -> Result<SectionSpec, MotionError> {
        SectionSpec::builder("about")
            .reveal(
                TITLE,
                "top 80%",
                tween(
                    fade().x(-60.0).clip_right(100.0),
                    shown().x(0.0).clip_right(0.0),
                    0.7,
                    "expo.out",
                )?,
            )
            .reveal(
                SHAPE,
                "top 80%",
                tween(
                    Props::new().scale(0.0).rotate(-180.0),
                    Props::new().scale(1.0).rotate(0.0),
                    0.8,
                    "elastic.out(1, 0.5)",
                )?
                .delay(0.1),
            )
            .reveal(
                IMAGE,
                "top 80%",
                tween(
                    fade().rotate_y(-90.0),
                    shown().rotate_y(0.0),
                    0.9,
                    "expo.out",
                )?
                .delay(0.2),
            )
            .reveal_tracks(
                PARAGRAPHS,
                "top 80%",
                vec![Track::all(
                    PARAGRAPH,
                    tween(fade().x(50.0), shown().x(0.0), 0.6, "power2.out")?
                        .stagger(0.12)
                        .delay(0.4),
                )],
            )
            .reveal(
                CTA,
                "top 90%",
                tween(
                    fade().scale(0.5),
                    shown().scale(1.0),
                    0.4,
                    "elastic.out(1, 0.5)",
                )?
                .delay(0.8),
            )
            .scrub("parallax", ROOT_ROLE, "top bottom", "bottom top", |p, frame| {
                frame.set(IMAGE, Props::new().y(-50.0 * p));
                frame.set(SHAPE, Props::new().rotate(45.0 * p));
            })
            .build()
    }
}

pub mod education {
    use super::*;

    pub const TIMELINE: &str = "timeline";
    pub const CARD: &str = "card";
    pub const DOT: &str = "dot";

    pub fn spec() -> Result<SectionSpec, MotionError> {
        let card = tween(fade(), shown().rotate_y(0.0).x(0.0), 0.7, "expo.out")?;
        let dot = tween(
            Props::new().scale(0.0),
            Props::new().scale(1.0),
            0.4,
            "elastic.out(1, 0.5)",
        )?;
        SectionSpec::builder("education")
            .reveal(
                TITLE,
                "top 80%",
                tween(fade().y(40.0), shown().y(0.0), 0.6, "expo.out")?,
            )
            .reveal(
                TIMELINE,
                "top 80%",
                tween(
                    Props::new().scale_y(0.0).origin("top"),
                    Props::new().scale_y(1.0),
                    1.0,
                    "expo.out",
                )?
                .delay(0.2),
            )
            .each(CARD, "top 85%", move |i| {
                let mut t = card.clone().delay(0.4 + i as f64 * 0.2);
                t.from = t.from.rotate_y(alternate(i, 90.0)).x(alternate(i, 50.0));
                t
            })
            .each(DOT, "top 85%", move |i| {
                dot.clone().delay(0.5 + i as f64 * 0.2)
            })
            .build()
    }
}

pub mod skills {
    use super::*;

    pub const CARD: &str = "card";

    pub fn spec() -> Result<SectionSpec, MotionError> {
        let card = tween(
            Props::new().scale(0.0),
            Props::new().scale(1.0).rotate(0.0),
            0.6,
            "elastic.out(1, 0.5)",
        )?;
        SectionSpec::builder("skills")
            .reveal(
                TITLE,
                "top 80%",
                tween(fade().y(40.0), shown().y(0.0), 0.8, "expo.out")?,
            )
            .each(CARD, "top 85%", move |i| {
                let mut t = card.clone().delay(0.2 + i as f64 * 0.1);
                t.from = t.from.rotate(alternate(i, 180.0));
                t
            })
            .build()
    }
}

pub mod experience {
    use super::*;

    pub const CAROUSEL: &str = "carousel";

    pub fn spec() -> Result<SectionSpec, MotionError> {
        SectionSpec::builder("experience")
            .reveal(
                TITLE,
                "top 80%",
                tween(fade().y(-50.0), shown().y(0.0), 0.7, "expo.out")?,
            )
            .reveal(
                CAROUSEL,
                "top 80%",
                tween(
                    fade().perspective(500.0),
                    shown().perspective(1000.0),
                    0.8,
                    "power2.out",
                )?
                .delay(0.2),
            )
            .build()
    }
}

pub mod certifications {
    use super::*;

    pub const SHAPES: &str = "shapes";
    pub const SHAPE: &str = "shape";
    pub const CARD: &str = "card";
    pub const BADGE: &str = "badge";

    pub fn spec() -> Result<SectionSpec, MotionError> {
        SectionSpec::builder("certifications")
            .reveal(
                TITLE,
                "top 80%",
                tween(fade().y(30.0), shown().y(0.0), 0.8, "power2.out")?,
            )
            .reveal_tracks(
                SHAPES,
                "top 80%",
                vec![Track::all(
                    SHAPE,
                    tween(
                        fade().y(100.0).rotate(0.0),
                        Props::new().opacity(0.3).y(0.0).rotate(360.0),
                        1.0,
                        "expo.out",
                    )?
                    .stagger(0.1)
                    .delay(0.2),
                )],
            )
            .reveal(
                CARD,
                "top 80%",
                tween(fade().y(80.0), shown().y(0.0), 0.8, "expo.out")?.delay(0.4),
            )
            .reveal(
                BADGE,
                "top 85%",
                tween(
                    Props::new().scale(0.0).rotate(-180.0),
                    Props::new().scale(1.0).rotate(0.0),
                    0.6,
                    "elastic.out(1, 0.5)",
                )?
                .delay(0.7),
            )
            .scrub("parallax", ROOT_ROLE, "top bottom", "bottom top", |p, frame| {
                frame.set(CARD, Props::new().y(30.0 - 60.0 * p));
                frame.set_each(SHAPE, |i| Props::new().y(-50.0 * p * (i + 1) as f64 * 0.5));
            })
            .build()
    }
}

pub mod contact {
    use super::*;

    pub const INFO: &str = "info";
    pub const INFO_ITEM: &str = "info-item";
    pub const LINE: &str = "line";
    pub const FORM: &str = "form";
    pub const FORM_FIELD: &str = "form-field";

    pub fn spec() -> Result<SectionSpec, MotionError> {
        SectionSpec::builder("contact")
            .reveal(
                TITLE,
                "top 80%",
                tween(fade().x(-50.0), shown().x(0.0), 0.7, "expo.out")?,
            )
            .reveal_tracks(
                INFO,
                "top 80%",
                vec![Track::all(
                    INFO_ITEM,
                    tween(fade().x(-30.0), shown().x(0.0), 0.5, "power2.out")?
                        .stagger(0.1)
                        .delay(0.2),
                )],
            )
            .reveal(
                LINE,
                "top 80%",
                tween(
                    Props::new().scale_x(0.0).origin("left"),
                    Props::new().scale_x(1.0),
                    0.6,
                    "expo.out",
                )?
                .delay(0.4),
            )
            .reveal_tracks(
                FORM,
                "top 80%",
                vec![
                    Track::all(
                        FORM,
                        tween(fade().x(50.0), shown().x(0.0), 0.7, "power2.out")?.delay(0.5),
                    ),
                    Track::all(
                        FORM_FIELD,
                        tween(fade().y(30.0), shown().y(0.0), 0.4, "power2.out")?
                            .stagger(0.1)
                            .delay(0.6),
                    ),
                ],
            )
            .scrub("parallax", ROOT_ROLE, "top bottom", "bottom top", |p, frame| {
                frame.set(INFO, Props::new().y(-40.0 * p));
                frame.set(FORM, Props::new().y(-60.0 * p));
            })
            .build()
    }
}

pub mod footer {
    use super::*;

    pub const BORDER: &str = "border";
    pub const CONTENT: &str = "content";
    pub const ITEM: &str = "item";

    pub fn spec() -> Result<SectionSpec, MotionError> {
        SectionSpec::builder("footer")
            .reveal_tracks(
                ROOT_ROLE,
                "top 90%",
                vec![Track::all(
                    BORDER,
                    tween(
                        Props::new().scale_x(0.0).origin("center"),
                        Props::new().scale_x(1.0),
                        0.8,
                        "expo.out",
                    )?,
                )],
            )
            .reveal_tracks(
                CONTENT,
                "top 90%",
                vec![Track::all(
                    ITEM,
                    tween(fade().y(20.0), shown().y(0.0), 0.5, "power2.out")?
                        .stagger(0.1)
                        .delay(0.2),
                )],
            )
            .build()
    }
}

/// Every section spec in page order.
pub fn all() -> Vec<fn() -> Result<SectionSpec, MotionError>> {
    vec![
        hero::spec,
        about::spec,
        education::spec,
        skills::spec,
        experience::spec,
        certifications::spec,
        contact::spec,
        footer::spec,
    ]
}
