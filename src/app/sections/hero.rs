use leptos::{html, prelude::*};

use super::scroll_to;
use crate::{
    app::section_motion::use_section_motion,
    choreography::hero::{self, CHAR, CTA, HEADLINE, PARTICLES, SUBHEADLINE, UNDERLINE},
    content::PROFILE,
    widgets::particles::particles,
};

const PARTICLE_COUNT: usize = 50;

fn letters(word: &str) -> impl IntoView {
    word.chars()
        .map(|c| {
            view! {
                <span data-motion=CHAR class="inline-block">
                    {c.to_string()}
                </span>
            }
        })
        .collect_view()
}

#[component]
pub fn Hero() -> impl IntoView {
    let root = NodeRef::<html::Section>::new();
    use_section_motion(root, hero::spec);

    let particles = particles(PARTICLE_COUNT)
        .into_iter()
        .map(|p| view! { <div class="particle" style=p.style()></div> })
        .collect_view();
    let diamonds = (0..5)
        .map(|i| {
            let fill = if i % 2 == 0 { "rgba(30, 144, 255, 0.2)" } else { "transparent" };
            let style = format!(
                "right: {}px; top: {}px; animation-delay: {}s; background-color: {fill}",
                i * 30,
                i * 40,
                i as f64 * 0.5,
            );
            view! {
                <div
                    class="absolute w-12 h-12 border-2 border-white/20 rotate-45 animate-float-slow"
                    style=style
                ></div>
            }
        })
        .collect_view();

    view! {
        <section
            id="hero"
            node_ref=root
            class="relative min-h-screen flex items-center justify-center overflow-hidden bg-gradient-to-br from-brand-navy via-brand-mid to-brand-blue"
        >
            <div data-motion=PARTICLES class="absolute inset-0 overflow-hidden pointer-events-none">
                {particles}
            </div>
            <div class="absolute right-10 top-1/4 hidden lg:block">{diamonds}</div>

            <div class="relative z-10 text-center px-4 sm:px-6 lg:px-8 max-w-5xl mx-auto">
                <div data-motion=HEADLINE class="perspective-1000 preserve-3d mb-6 animate-float-hero">
                    <h1 class="text-5xl sm:text-6xl md:text-7xl lg:text-8xl font-extrabold text-white tracking-tight">
                        <span class="block mb-2">{letters(&PROFILE.first_name)}</span>
                        <span class="block relative">
                            {letters(&PROFILE.last_name)}
                            <div
                                data-motion=UNDERLINE
                                class="absolute -bottom-2 left-1/2 -translate-x-1/2 h-1.5 w-3/4 rounded-full animate-shimmer"
                            ></div>
                        </span>
                    </h1>
                </div>
                <p
                    data-motion=SUBHEADLINE
                    class="text-lg sm:text-xl md:text-2xl text-white/90 mb-10 max-w-3xl mx-auto font-light"
                >
                    {PROFILE.headline.clone()}
                </p>
                <a
                    data-motion=CTA
                    href="#about"
                    class="inline-flex items-center gap-2 px-8 py-4 bg-white text-brand-navy rounded-full font-bold text-lg transition-all duration-300 hover:-translate-y-1 hover:bg-brand-navy hover:text-white"
                    on:click=move |e| {
                        e.prevent_default();
                        scroll_to("about");
                    }
                >
                    "View My Portfolio"
                    <i class="icon-chevron-down animate-bounce"></i>
                </a>
            </div>
            <div class="absolute bottom-0 inset-x-0 h-32 bg-gradient-to-t from-white to-transparent"></div>
        </section>
    }
}
