use leptos::{html, prelude::*};

use crate::{
    app::section_motion::use_section_motion,
    choreography::{
        about::{self, CTA, IMAGE, PARAGRAPH, PARAGRAPHS, SHAPE},
        TITLE,
    },
    content::PROFILE,
};

#[component]
pub fn About() -> impl IntoView {
    let root = NodeRef::<html::Section>::new();
    use_section_motion(root, about::spec);

    let badge = &PROFILE.badge;
    let paragraphs = PROFILE
        .about
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let class = if i == 0 { "text-lg" } else { "" };
            view! {
                <p data-motion=PARAGRAPH class=class>
                    {text.clone()}
                </p>
            }
        })
        .collect_view();

    view! {
        <section id="about" node_ref=root class="relative py-20 lg:py-32 bg-white overflow-hidden">
            <div
                data-motion=SHAPE
                class="absolute left-0 top-1/4 w-64 h-64 -translate-x-1/2 opacity-10"
            >
                <svg viewBox="0 0 200 200" class="w-full h-full animate-slow-rotate">
                    <path
                        fill="none"
                        stroke="#1e90ff"
                        stroke-width="2"
                        d="M100,10 L190,100 L100,190 L10,100 Z"
                    />
                    <path fill="rgba(203, 233, 255, 0.3)" d="M100,30 L170,100 L100,170 L30,100 Z" />
                </svg>
            </div>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid lg:grid-cols-2 gap-12 lg:gap-20 items-center">
                    <div class="relative order-2 lg:order-1">
                        <div
                            data-motion=IMAGE
                            class="relative perspective-1000 preserve-3d group animate-breathe-subtle"
                        >
                            <div class="absolute -inset-4 bg-gradient-to-br from-brand-sky to-brand-blue rounded-3xl opacity-30 rotate-3 transition-transform duration-500 group-hover:rotate-6"></div>
                            <div class="relative overflow-hidden rounded-2xl shadow-2xl transition-transform duration-500 group-hover:scale-[1.02] group-hover:rotate-1">
                                <img
                                    src=PROFILE.portrait.clone()
                                    alt=PROFILE.full_name()
                                    class="w-full h-auto object-cover"
                                />
                                <div class="absolute inset-0 bg-gradient-to-t from-brand-navy/20 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-500"></div>
                            </div>
                            <div class="absolute -bottom-4 -right-4 bg-white rounded-xl shadow-xl p-4 animate-float-slow">
                                <div class="flex items-center gap-3">
                                    <div class="w-12 h-12 bg-brand-blue rounded-full flex items-center justify-center">
                                        <span class="text-white font-bold text-lg">
                                            {badge.value.clone()}
                                        </span>
                                    </div>
                                    <div>
                                        <p class="text-sm text-brand-gray">{badge.label.clone()}</p>
                                        <p class="font-bold text-brand-navy">{badge.caption.clone()}</p>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="order-1 lg:order-2">
                        <h2
                            data-motion=TITLE
                            class="text-4xl sm:text-5xl font-extrabold text-brand-navy mb-8"
                        >
                            "About Me"
                        </h2>
                        <div
                            data-motion=PARAGRAPHS
                            class="space-y-5 text-brand-navy/80 leading-relaxed"
                        >
                            {paragraphs}
                        </div>
                        <a
                            data-motion=CTA
                            href=PROFILE.cv.clone()
                            download=""
                            class="inline-flex items-center gap-3 mt-8 px-8 py-4 border-2 border-brand-blue text-brand-blue rounded-full font-bold transition-all duration-300 hover:bg-brand-blue hover:text-white hover:-translate-y-1 hover:shadow-lg"
                        >
                            <i class="icon-download"></i>
                            "Download CV"
                        </a>
                    </div>
                </div>
            </div>

            <div class="absolute right-0 top-1/3 w-32 h-0.5 bg-gradient-to-r from-brand-blue to-transparent"></div>
            <div class="absolute right-0 top-1/3 mt-4 w-24 h-0.5 bg-gradient-to-r from-brand-sky to-transparent"></div>
            <div class="absolute right-0 top-1/3 mt-8 w-16 h-0.5 bg-gradient-to-r from-brand-blue/50 to-transparent"></div>
        </section>
    }
}
