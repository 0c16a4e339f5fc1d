mod about;
mod contact;
mod counters;
mod faq;
mod footer;
mod hero;
mod navbar;
mod projects;
mod reveal;
mod testimonials;

pub use contact::send_contact_message;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{site_content, SiteContent};
use about::About;
use contact::Contact;
use faq::FaqSection;
use footer::Footer;
use hero::Hero;
use navbar::Navbar;
use projects::Projects;
use testimonials::Testimonials;

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
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased scroll-smooth bg-white dark:bg-gray-900">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let page = move || match site_content() {
        Ok(content) => view! { <HomePage content /> }.into_any(),
        Err(e) => {
            log::error!("couldn't load site content: {e}");
            view! { <p class="p-8 text-center text-red-500">"Couldn't load this page."</p> }
                .into_any()
        }
    };

    view! {
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=page />
            </Routes>
        </Router>
    }
}

/// The whole portfolio. Every section renders from the injected content only.
#[component]
pub fn HomePage(content: Arc<SiteContent>) -> impl IntoView {
    let profile = content.profile.clone();
    view! {
        <Title text=format!("{} - {}", profile.name, profile.role) />
        <Meta name="description" content=profile.tagline.clone() />
        <Navbar brand=profile.brand.clone() items=content.nav.clone() />
        <main class="px-4 md:px-12 lg:px-24 py-10 space-y-24">
            <Hero profile=profile.clone() socials=content.socials.clone() />
            <About content=content.clone() />
            <Projects projects=content.projects.clone() />
            <Testimonials testimonials=content.testimonials.clone() />
            <FaqSection faqs=content.faqs.clone() />
            <Contact email=profile.email.clone() />
        </main>
        <Footer profile nav=content.nav.clone() socials=content.socials.clone() />
    }
}
