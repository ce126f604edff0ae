mod dom_stage;
mod navigation;
mod section_motion;
mod sections;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{
    content::PROFILE,
    motion::{MotionConfig, MotionRuntime},
};
use navigation::Navigation;
use sections::{About, Certifications, Contact, Education, Experience, Footer, Hero, Skills};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" href="https://unpkg.com/lucide-static@latest/font/lucide.css" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased bg-white">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    // one runtime for the whole page, before any section mounts
    provide_context(MotionRuntime::new(MotionConfig::default()));

    view! {
        <Title text=PROFILE.full_name() />
        <Meta name="description" content=PROFILE.headline.clone() />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Portfolio />
            </Routes>
        </Router>
    }
}

/// Every section in page order.
#[component]
fn Portfolio() -> impl IntoView {
    view! {
        <Navigation />
        <main class="overflow-x-hidden">
            <Hero />
            <About />
            <Education />
            <Skills />
            <Experience />
            <Certifications />
            <Contact />
        </main>
        <Footer />
    }
}
