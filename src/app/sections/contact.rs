use leptos::{ev, html, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::SectionTitle;
use crate::{
    app::section_motion::use_section_motion,
    choreography::contact::{self, FORM, FORM_FIELD, INFO, INFO_ITEM, LINE},
    content::PROFILE,
    widgets::contact::{ContactForm, Field, FormError, SUCCESS_DISPLAY_MS},
};

const INPUT: &str = "w-full px-4 py-3 rounded-xl border border-brand-sky focus:border-brand-blue focus:ring-2 focus:ring-brand-blue/20 outline-none transition-all duration-300";

#[component]
pub fn Contact() -> impl IntoView {
    let root = NodeRef::<html::Section>::new();
    use_section_motion(root, contact::spec);

    let (form, set_form) = signal(ContactForm::default());
    let (error, set_error) = signal(None::<FormError>);
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| set_form.update(ContactForm::reset),
        SUCCESS_DISPLAY_MS,
    );

    let on_submit = move |e: ev::SubmitEvent| {
        e.prevent_default();
        let mut result = Ok(());
        set_form.update(|f| result = f.submit());
        match result {
            Ok(()) => {
                set_error.set(None);
                start(());
            }
            Err(err) => set_error.set(Some(err)),
        }
    };

    let value = move |field: Field| form.with(|f| f.value(field).to_string());

    let info = PROFILE
        .contact
        .iter()
        .map(|c| {
            let body = match &c.href {
                Some(href) => view! {
                    <a href=href.clone() class="font-medium text-brand-navy hover:text-brand-blue transition-colors">
                        {c.value.clone()}
                    </a>
                }
                .into_any(),
                None => view! { <p class="font-medium text-brand-navy">{c.value.clone()}</p> }.into_any(),
            };
            view! {
                <div data-motion=INFO_ITEM class="flex items-center gap-4">
                    <div class="w-12 h-12 bg-gradient-to-br from-brand-blue to-brand-navy rounded-xl flex items-center justify-center text-white text-xl flex-shrink-0">
                        <i class=c.icon.clone()></i>
                    </div>
                    <div>
                        <p class="text-sm text-brand-gray">{c.label.clone()}</p>
                        {body}
                    </div>
                </div>
            }
        })
        .collect_view();
    let languages = PROFILE
        .languages
        .iter()
        .map(|l| {
            view! {
                <span class="px-3 py-1 bg-brand-sky/50 text-brand-navy rounded-full text-sm">
                    {format!("{} ({})", l.name, l.level)}
                </span>
            }
        })
        .collect_view();
    let social = PROFILE
        .social
        .iter()
        .map(|s| {
            view! {
                <a
                    href=s.href.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label=s.label.clone()
                    class="w-12 h-12 bg-white rounded-full shadow-md flex items-center justify-center text-brand-navy text-xl hover:bg-brand-blue hover:text-white transition-all duration-300 animate-social-pulse"
                >
                    <i class=s.icon.clone()></i>
                </a>
            }
        })
        .collect_view();

    view! {
        <section
            id="contact"
            node_ref=root
            class="relative py-20 lg:py-32 bg-gradient-to-b from-white to-brand-sky/30 overflow-hidden"
        >
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionTitle text="Get In Touch" />
                <div class="grid lg:grid-cols-2 gap-12">
                    <div data-motion=INFO class="space-y-6">
                        <p class="text-lg text-brand-navy/80">
                            "Have a question or want to work together? Feel free to reach out."
                        </p>
                        {info}
                        <div data-motion=LINE class="h-0.5 bg-gradient-to-r from-brand-blue to-transparent"></div>
                        <div>
                            <h4 class="font-bold text-brand-navy mb-3">"Languages"</h4>
                            <div class="flex flex-wrap gap-2">{languages}</div>
                        </div>
                        <div class="flex gap-4">{social}</div>
                    </div>

                    <div data-motion=FORM class="bg-white rounded-3xl p-8 shadow-xl">
                        <Show
                            when=move || form.with(ContactForm::is_sent)
                            fallback=move || {
                                view! {
                                    <form class="space-y-6" novalidate=true on:submit=on_submit.clone()>
                                        <div data-motion=FORM_FIELD>
                                            <label for="name" class="block text-sm font-medium text-brand-navy mb-2">
                                                "Your Name"
                                            </label>
                                            <input
                                                id="name"
                                                type="text"
                                                required=true
                                                placeholder="John Doe"
                                                class=INPUT
                                                prop:value=move || value(Field::Name)
                                                on:input=move |e| set_form.update(|f| f.set(Field::Name, event_target_value(&e)))
                                            />
                                        </div>
                                        <div data-motion=FORM_FIELD>
                                            <label for="email" class="block text-sm font-medium text-brand-navy mb-2">
                                                "Your Email"
                                            </label>
                                            <input
                                                id="email"
                                                type="email"
                                                required=true
                                                placeholder="john@example.com"
                                                class=INPUT
                                                prop:value=move || value(Field::Email)
                                                on:input=move |e| set_form.update(|f| f.set(Field::Email, event_target_value(&e)))
                                            />
                                        </div>
                                        <div data-motion=FORM_FIELD>
                                            <label for="message" class="block text-sm font-medium text-brand-navy mb-2">
                                                "Your Message"
                                            </label>
                                            <textarea
                                                id="message"
                                                rows="5"
                                                required=true
                                                placeholder="Your message..."
                                                class=format!("{INPUT} resize-none")
                                                prop:value=move || value(Field::Message)
                                                on:input=move |e| set_form.update(|f| f.set(Field::Message, event_target_value(&e)))
                                            ></textarea>
                                        </div>
                                        <Show when=move || error.get().is_some()>
                                            <p class="text-sm text-red-500">
                                                {move || error.get().map(|e| e.to_string())}
                                            </p>
                                        </Show>
                                        <button
                                            data-motion=FORM_FIELD
                                            type="submit"
                                            class="w-full inline-flex items-center justify-center gap-2 px-8 py-4 bg-gradient-to-r from-brand-blue to-brand-navy text-white rounded-xl font-bold transition-all duration-300 hover:-translate-y-1 hover:shadow-lg"
                                        >
                                            <i class="icon-send"></i>
                                            "Send Message"
                                        </button>
                                    </form>
                                }
                            }
                        >
                            <div class="flex flex-col items-center justify-center text-center py-12">
                                <div class="w-20 h-20 bg-green-500 rounded-full flex items-center justify-center text-white text-4xl mb-6">
                                    <i class="icon-circle-check"></i>
                                </div>
                                <h3 class="text-2xl font-bold text-brand-navy mb-2">"Message Sent!"</h3>
                                <p class="text-brand-navy/70">"Thank you for reaching out. I'll get back to you soon."</p>
                            </div>
                        </Show>
                    </div>
                </div>
            </div>
        </section>
    }
}
