mod about;
mod certifications;
mod contact;
mod education;
mod experience;
mod footer;
mod hero;
mod skills;

pub use about::About;
pub use certifications::Certifications;
pub use contact::Contact;
pub use education::Education;
pub use experience::Experience;
pub use footer::Footer;
pub use hero::Hero;
pub use skills::Skills;

use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::choreography::TITLE;

/// Smooth-scroll the page to the section with anchor `id`.
pub fn scroll_to(id: &str) {
    let Some(el) = document().get_element_by_id(id) else {
        log::warn!("no section with id {id}");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Section heading with the accent bar under it.
#[component]
fn SectionTitle(#[prop(into)] text: String) -> impl IntoView {
    view! {
        <div data-motion=TITLE class="text-center mb-16">
            <h2 class="text-4xl md:text-5xl font-bold text-brand-navy mb-4">{text}</h2>
            <div class="w-24 h-1 mx-auto rounded-full bg-gradient-to-r from-brand-navy to-brand-blue"></div>
        </div>
    }
}
