use leptos::{html, prelude::*};

use super::SectionTitle;
use crate::{
    app::section_motion::use_section_motion,
    choreography::skills::{self, CARD},
    content::PROFILE,
    widgets::flip::FlipDeck,
};

#[component]
pub fn Skills() -> impl IntoView {
    let root = NodeRef::<html::Section>::new();
    use_section_motion(root, skills::spec);
    let (deck, set_deck) = signal(FlipDeck::default());

    let cards = PROFILE
        .skills
        .iter()
        .enumerate()
        .map(|(i, skill)| {
            let accent = format!("background-color: {}", skill.color);
            view! {
                <div
                    data-motion=CARD
                    class="h-64 perspective-1000 cursor-pointer"
                    on:mouseenter=move |_| set_deck.update(|d| d.enter(i))
                    on:mouseleave=move |_| set_deck.update(|d| d.leave(i))
                >
                    <div
                        class="relative w-full h-full preserve-3d transition-transform duration-700"
                        style=move || {
                            if deck.get().is_flipped(i) {
                                "transform: rotateY(180deg)"
                            } else {
                                "transform: rotateY(0deg)"
                            }
                        }
                    >
                        <div class="absolute inset-0 backface-hidden bg-white rounded-2xl shadow-lg p-6 flex flex-col items-center justify-center text-center">
                            <div
                                class="w-16 h-16 rounded-2xl flex items-center justify-center text-white text-3xl mb-4 animate-icon-pulse"
                                style=accent.clone()
                            >
                                <i class=skill.icon.clone()></i>
                            </div>
                            <h3 class="text-lg font-bold text-brand-navy">{skill.title.clone()}</h3>
                        </div>
                        <div
                            class="absolute inset-0 backface-hidden rotate-y-180 rounded-2xl shadow-lg p-6 flex items-center justify-center text-center text-white"
                            style=accent
                        >
                            <p class="leading-relaxed">{skill.description.clone()}</p>
                        </div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="skills" node_ref=root class="relative py-20 lg:py-32 bg-white overflow-hidden">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionTitle text="Skills" />
                <div class="grid sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-5 gap-6">{cards}</div>
            </div>
        </section>
    }
}
