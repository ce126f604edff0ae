use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use super::sections::scroll_to;
use crate::{
    content::PROFILE,
    widgets::nav::{NavState, SECTIONS},
};

fn section_tops() -> Vec<Option<f64>> {
    let scroll = window().scroll_y().unwrap_or(0.0);
    SECTIONS
        .iter()
        .map(|(id, _)| {
            document()
                .get_element_by_id(id)
                .map(|el| el.get_bounding_client_rect().top() + scroll)
        })
        .collect()
}

#[component]
pub fn Navigation() -> impl IntoView {
    let (nav, set_nav) = signal(NavState::default());

    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        let scroll = window().scroll_y().unwrap_or(0.0);
        let viewport = window()
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        let tops = section_tops();
        set_nav.update(|n| n.observe(scroll, viewport, &tops));
    });

    let follow = move |id: &'static str| {
        set_nav.update(|n| n.follow(id));
        scroll_to(id);
    };

    let links = move |mobile: bool| {
        SECTIONS
            .iter()
            .map(|(id, label)| {
                let id = *id;
                view! {
                    <a
                        href=format!("#{id}")
                        class=move || {
                            let base = if mobile {
                                "block px-4 py-3 text-lg"
                            } else {
                                "px-3 py-2 text-sm font-medium"
                            };
                            if nav.get().active() == id {
                                format!("{base} text-brand-blue")
                            } else {
                                format!("{base} text-white/80 hover:text-white")
                            }
                        }
                        on:click=move |e| {
                            e.prevent_default();
                            follow(id);
                        }
                    >
                        {*label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class=move || {
            if nav.get().is_scrolled() {
                "fixed top-0 inset-x-0 z-50 transition-all duration-300 bg-brand-dark/90 backdrop-blur-md shadow-lg"
            } else {
                "fixed top-0 inset-x-0 z-50 transition-all duration-300 bg-transparent"
            }
        }>
            <div class="max-w-7xl mx-auto px-6 flex items-center justify-between h-16">
                <a
                    href="#hero"
                    class="text-xl font-bold text-white"
                    on:click=move |e| {
                        e.prevent_default();
                        follow("hero");
                    }
                >
                    {PROFILE.first_name.clone()}
                    <span class="text-brand-blue">"."</span>
                </a>
                <div class="hidden md:flex gap-1">{links(false)}</div>
                <button
                    class="md:hidden text-white text-2xl"
                    aria-label="Toggle menu"
                    on:click=move |_| set_nav.update(NavState::toggle_menu)
                >
                    <i class=move || {
                        if nav.get().is_menu_open() { "icon-x" } else { "icon-menu" }
                    }></i>
                </button>
            </div>
            <Show when=move || nav.get().is_menu_open()>
                <div class="md:hidden bg-brand-dark/95 backdrop-blur-md">{links(true)}</div>
            </Show>
        </nav>
    }
}
