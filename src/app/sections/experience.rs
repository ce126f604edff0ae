use leptos::{html, prelude::*};

use crate::{
    app::section_motion::use_section_motion,
    choreography::{
        experience::{self, CAROUSEL},
        TITLE,
    },
    content::PROFILE,
    widgets::carousel::{Carousel, Slot},
};

const ARROW: &str = "absolute top-1/2 -translate-y-1/2 z-20 w-12 h-12 bg-white rounded-full shadow-lg flex items-center justify-center text-brand-navy text-2xl hover:bg-brand-blue hover:text-white transition-all duration-300";

#[component]
pub fn Experience() -> impl IntoView {
    let root = NodeRef::<html::Section>::new();
    use_section_motion(root, experience::spec);
    let (carousel, set_carousel) = signal(Carousel::new(PROFILE.experience.len()));

    let cards = PROFILE
        .experience
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let responsibilities = item
                .responsibilities
                .iter()
                .map(|r| {
                    view! {
                        <li class="flex items-start gap-3 text-brand-navy/70">
                            <i class="icon-circle-check text-brand-blue mt-0.5"></i>
                            <span>{r.clone()}</span>
                        </li>
                    }
                })
                .collect_view();
            view! {
                <div
                    class="absolute w-full max-w-2xl transition-all duration-600"
                    style=move || carousel.get().slot(i).style()
                >
                    <div class=move || {
                        if carousel.get().slot(i) == Slot::Active {
                            "bg-white rounded-3xl p-8 shadow-xl transition-all duration-300 hover:shadow-2xl hover:scale-105"
                        } else {
                            "bg-white rounded-3xl p-8 shadow-xl transition-all duration-300"
                        }
                    }>
                        <div class="flex items-start gap-4 mb-6">
                            <div class="w-16 h-16 bg-gradient-to-br from-brand-blue to-brand-navy rounded-2xl flex items-center justify-center text-white text-3xl flex-shrink-0">
                                <i class="icon-briefcase"></i>
                            </div>
                            <div>
                                <h3 class="text-2xl font-bold text-brand-navy">{item.title.clone()}</h3>
                                <p class="text-brand-blue font-medium">{item.company.clone()}</p>
                                <div class="flex items-center gap-4 mt-2 text-sm text-brand-gray">
                                    <span class="flex items-center gap-1">
                                        <i class="icon-map-pin"></i>
                                        {item.location.clone()}
                                    </span>
                                    <span class="flex items-center gap-1">
                                        <i class="icon-calendar"></i>
                                        {item.period.clone()}
                                    </span>
                                </div>
                            </div>
                        </div>
                        <p class="text-brand-navy/80 mb-6">{item.description.clone()}</p>
                        <div class="space-y-3">
                            <h4 class="font-bold text-brand-navy">"Key Responsibilities:"</h4>
                            <ul class="space-y-2">{responsibilities}</ul>
                        </div>
                    </div>
                </div>
            }
        })
        .collect_view();

    let dots = move || {
        (0..carousel.get().len())
            .map(|i| {
                view! {
                    <button
                        aria-label=format!("Show experience {}", i + 1)
                        class=move || {
                            if carousel.get().active() == i {
                                "h-3 rounded-full transition-all duration-300 bg-brand-blue w-8"
                            } else {
                                "h-3 rounded-full transition-all duration-300 w-3 bg-brand-sky hover:bg-brand-blue/50"
                            }
                        }
                        on:click=move |_| {
                            set_carousel.update(|c| {
                                c.select(i);
                            })
                        }
                    ></button>
                }
            })
            .collect_view()
    };

    view! {
        <section
            id="experience"
            node_ref=root
            class="relative py-20 lg:py-32 bg-gradient-to-b from-brand-sky/30 to-white overflow-hidden"
        >
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <h2
                    data-motion=TITLE
                    class="text-4xl sm:text-5xl font-extrabold text-brand-navy text-center mb-16"
                >
                    "Experience"
                </h2>
                <div data-motion=CAROUSEL class="relative perspective-1000 min-h-[400px]">
                    <div class="relative flex items-center justify-center preserve-3d">{cards}</div>
                    <Show when=move || carousel.get().has_controls()>
                        <button
                            aria-label="Previous"
                            class=format!("left-0 {ARROW}")
                            on:click=move |_| set_carousel.update(Carousel::prev)
                        >
                            <i class="icon-chevron-left"></i>
                        </button>
                        <button
                            aria-label="Next"
                            class=format!("right-0 {ARROW}")
                            on:click=move |_| set_carousel.update(Carousel::next)
                        >
                            <i class="icon-chevron-right"></i>
                        </button>
                        <div class="flex justify-center gap-2 mt-8">{dots}</div>
                    </Show>
                </div>
            </div>
            <div class="absolute top-20 left-10 w-40 h-40 bg-brand-blue/5 rounded-full blur-3xl"></div>
            <div class="absolute bottom-20 right-10 w-32 h-32 bg-brand-sky/50 rounded-full blur-2xl"></div>
        </section>
    }
}
