use leptos::{html, prelude::*};

use super::scroll_to;
use crate::{
    app::section_motion::use_section_motion,
    choreography::footer::{self, BORDER, CONTENT, ITEM},
    content::{build_year, PROFILE},
    widgets::nav::SECTIONS,
};

#[component]
pub fn Footer() -> impl IntoView {
    let root = NodeRef::<html::Footer>::new();
    use_section_motion(root, footer::spec);

    let links = SECTIONS
        .iter()
        .map(|(id, label)| {
            let id = *id;
            view! {
                <a
                    href=format!("#{id}")
                    class="text-white/70 hover:text-white transition-colors"
                    on:click=move |e| {
                        e.prevent_default();
                        scroll_to(id);
                    }
                >
                    {*label}
                </a>
            }
        })
        .collect_view();

    view! {
        <footer node_ref=root class="relative bg-brand-navy text-white py-12">
            <div
                data-motion=BORDER
                class="absolute top-0 inset-x-0 h-1 bg-gradient-to-r from-brand-blue via-brand-sky to-brand-blue animate-gradient-flow"
            ></div>
            <div data-motion=CONTENT class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 text-center space-y-6">
                <div data-motion=ITEM>
                    <p class="text-2xl font-bold">{PROFILE.full_name()}</p>
                    <p class="text-white/70">{PROFILE.tagline.clone()}</p>
                </div>
                <nav data-motion=ITEM class="flex flex-wrap justify-center gap-6 text-sm">
                    {links}
                </nav>
                <p data-motion=ITEM class="text-sm text-white/50">
                    {format!("© {} {}. All rights reserved.", build_year(), PROFILE.full_name())}
                </p>
            </div>
        </footer>
    }
}
