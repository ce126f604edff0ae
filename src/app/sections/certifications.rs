use leptos::{html, prelude::*};

use super::scroll_to;
use crate::{
    app::section_motion::use_section_motion,
    choreography::{
        certifications::{self, BADGE, CARD, SHAPE, SHAPES},
        TITLE,
    },
    content::PROFILE,
};

const SHAPE_CLASSES: [&str; 4] = [
    "absolute top-20 left-10 w-32 h-32 border-2 border-brand-sky rounded-2xl rotate-12",
    "absolute top-40 right-20 w-24 h-24 bg-brand-sky/30 rounded-full",
    "absolute bottom-20 left-1/4 w-16 h-16 bg-brand-blue/10 rounded-lg -rotate-12",
    "absolute bottom-40 right-1/3 w-20 h-20 border-2 border-brand-blue/20 rounded-full",
];

#[component]
pub fn Certifications() -> impl IntoView {
    let root = NodeRef::<html::Section>::new();
    use_section_motion(root, certifications::spec);

    let cert = &PROFILE.certification;
    let shapes = SHAPE_CLASSES
        .iter()
        .map(|class| view! { <div data-motion=SHAPE class=*class style="opacity: 0"></div> })
        .collect_view();

    view! {
        <section
            id="certifications"
            node_ref=root
            class="relative py-20 lg:py-32 bg-white overflow-hidden"
        >
            <div data-motion=SHAPES class="absolute inset-0 pointer-events-none overflow-hidden">
                {shapes}
            </div>

            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <h2
                    data-motion=TITLE
                    class="text-4xl sm:text-5xl font-extrabold text-brand-navy text-center mb-16"
                >
                    "Certifications"
                </h2>

                <div
                    data-motion=CARD
                    class="relative glass rounded-3xl p-8 lg:p-12 shadow-xl overflow-hidden group"
                >
                    <div class="absolute inset-0 overflow-hidden pointer-events-none">
                        <div class="absolute top-0 -left-full w-full h-full -skew-x-20 bg-gradient-to-r from-transparent via-white/20 to-transparent group-hover:left-full transition-all duration-1000"></div>
                    </div>
                    <div class="flex flex-col lg:flex-row items-center gap-8">
                        <div data-motion=BADGE class="relative flex-shrink-0 animate-badge-float">
                            <div class="w-28 h-28 bg-gradient-to-br from-brand-blue to-brand-navy rounded-2xl flex items-center justify-center text-white text-5xl shadow-lg shadow-brand-blue/30">
                                <i class="icon-trophy"></i>
                            </div>
                            <div class="absolute inset-0 bg-brand-blue rounded-2xl blur-xl opacity-30 -z-10"></div>
                        </div>
                        <div class="text-center lg:text-left flex-1">
                            <h3 class="text-2xl lg:text-3xl font-bold text-brand-navy mb-4">
                                {cert.title.clone()}
                            </h3>
                            <div class="flex flex-wrap items-center justify-center lg:justify-start gap-4 mb-4">
                                <span class="inline-flex items-center gap-2 px-4 py-2 bg-brand-blue/10 text-brand-blue rounded-full text-sm font-medium">
                                    <i class="icon-user"></i>
                                    {cert.status.clone()}
                                </span>
                                <span class="inline-flex items-center gap-2 px-4 py-2 bg-brand-sky/50 text-brand-navy rounded-full text-sm font-medium">
                                    <i class="icon-building-2"></i>
                                    {cert.sponsor.clone()}
                                </span>
                            </div>
                            <p class="text-brand-navy/70 leading-relaxed mb-6">
                                {cert.description.clone()}
                            </p>
                            <div class="space-y-2">
                                <div class="flex justify-between text-sm">
                                    <span class="text-brand-gray">"Progress"</span>
                                    <span class="text-brand-blue font-medium">"In Progress"</span>
                                </div>
                                <div class="h-2 bg-[#e0e0e0] rounded-full overflow-hidden">
                                    <div
                                        class="h-full bg-gradient-to-r from-brand-blue to-brand-navy rounded-full animate-shimmer"
                                        style=format!("width: {}%", cert.progress.min(100))
                                    ></div>
                                </div>
                            </div>
                        </div>
                    </div>
                    <div class="absolute top-4 right-4 w-8 h-8 border-t-2 border-r-2 border-brand-blue/30 rounded-tr-lg"></div>
                    <div class="absolute bottom-4 left-4 w-8 h-8 border-b-2 border-l-2 border-brand-blue/30 rounded-bl-lg"></div>
                </div>

                <div class="text-center mt-8">
                    <a
                        href="#contact"
                        class="inline-flex items-center gap-2 text-brand-blue hover:text-brand-navy font-medium transition-colors duration-300"
                        on:click=move |e| {
                            e.prevent_default();
                            scroll_to("contact");
                        }
                    >
                        <i class="icon-external-link"></i>
                        "Contact me for certification updates"
                    </a>
                </div>
            </div>
        </section>
    }
}
