use leptos::{html, prelude::*};

use crate::{
    app::section_motion::use_section_motion,
    choreography::{
        education::{self, CARD, DOT, TIMELINE},
        TITLE,
    },
    content::PROFILE,
};

const LINE: &str = "bg-gradient-to-b from-brand-blue via-brand-sky to-brand-blue rounded-full";

#[component]
pub fn Education() -> impl IntoView {
    let root = NodeRef::<html::Section>::new();
    use_section_motion(root, education::spec);

    let entries = PROFILE
        .education
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let (row, card, tilt) = if i % 2 == 0 {
                ("md:flex-row", "md:pr-8", "transform: rotateY(-5deg)")
            } else {
                ("md:flex-row-reverse", "md:pl-8", "transform: rotateY(5deg)")
            };
            view! {
                <div class=format!("relative flex items-center flex-row {row}")>
                    <div
                        data-motion=CARD
                        class=format!("w-full md:w-5/12 ml-12 md:ml-0 perspective-800 {card}")
                        style=tilt
                    >
                        <div class="bg-white rounded-2xl p-6 shadow-lg hover:shadow-xl transition-all duration-300 hover:-translate-y-2 group">
                            <div class="w-12 h-12 bg-gradient-to-br from-brand-blue to-brand-navy rounded-xl flex items-center justify-center text-white text-xl mb-4 group-hover:scale-110 transition-transform duration-300">
                                <i class=item.icon.clone()></i>
                            </div>
                            <h3 class="text-xl font-bold text-brand-navy mb-2">
                                {item.degree.clone()}
                            </h3>
                            <p class="text-brand-blue font-medium mb-1">
                                {item.institution.clone()}
                            </p>
                            <div class="flex items-center gap-4 text-sm text-brand-gray">
                                <span class="flex items-center gap-1">
                                    <i class="icon-calendar"></i>
                                    {item.period.clone()}
                                </span>
                                <span class="flex items-center gap-1">
                                    <i class="icon-award"></i>
                                    {item.grade.clone()}
                                </span>
                            </div>
                        </div>
                    </div>
                    <div
                        data-motion=DOT
                        class="absolute left-4 md:left-1/2 md:-translate-x-1/2 w-5 h-5 bg-brand-blue rounded-full border-4 border-white shadow-lg animate-dot-pulse"
                        style=format!("animation-delay: {}s", i as f64 * 0.5)
                    ></div>
                    <div class="hidden md:block md:w-5/12"></div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section
            id="education"
            node_ref=root
            class="relative py-20 lg:py-32 bg-gradient-to-b from-white to-brand-sky/30 overflow-hidden"
        >
            <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8">
                <h2
                    data-motion=TITLE
                    class="text-4xl sm:text-5xl font-extrabold text-brand-navy text-center mb-16"
                >
                    "Education"
                </h2>
                <div class="relative">
                    <div
                        data-motion=TIMELINE
                        class=format!("absolute left-1/2 -translate-x-1/2 w-1 h-full hidden md:block {LINE}")
                    ></div>
                    <div class=format!("absolute left-4 w-1 h-full md:hidden {LINE}")></div>
                    <div class="space-y-12">{entries}</div>
                </div>
            </div>
            <div class="absolute top-20 right-10 w-32 h-32 bg-brand-sky/30 rounded-full blur-3xl"></div>
            <div class="absolute bottom-20 left-10 w-40 h-40 bg-brand-blue/10 rounded-full blur-3xl"></div>
        </section>
    }
}
