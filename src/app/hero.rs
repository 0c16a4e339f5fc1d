use leptos::prelude::*;

use super::reveal::Reveal;
use crate::content::{Profile, SocialLink};

#[component]
pub fn Hero(profile: Profile, socials: Vec<SocialLink>) -> impl IntoView {
    let portrait_alt = profile.name.clone();
    view! {
        <section
            id="home"
            class="min-h-screen flex items-center justify-center px-4 sm:px-6 bg-gradient-to-br from-white via-blue-50 to-blue-100 dark:from-gray-900 dark:via-gray-800 dark:to-gray-700"
        >
            <div class="max-w-7xl mx-auto grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                <div class="text-center lg:text-left">
                    <Reveal delay_ms=200>
                        <span class="inline-block px-3 py-1 text-sm font-medium rounded-full bg-blue-100 text-blue-600 dark:bg-blue-900/30 dark:text-blue-400 mb-4">
                            {profile.role.clone()}
                        </span>
                    </Reveal>
                    <Reveal index=1 delay_ms=200>
                        <h1 class="text-4xl sm:text-5xl md:text-6xl font-extrabold text-gray-900 dark:text-white mb-6 leading-tight">
                            "Hi, I'm "
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-blue-600 to-blue-400">
                                {profile.name.clone()}
                            </span>
                        </h1>
                    </Reveal>
                    <Reveal index=2 delay_ms=200>
                        <p class="text-lg md:text-xl text-gray-600 dark:text-gray-300 mb-8 max-w-2xl mx-auto lg:mx-0">
                            {profile.tagline.clone()}
                        </p>
                    </Reveal>
                    <Reveal index=3 delay_ms=200>
                        <div class="flex flex-col sm:flex-row gap-4 justify-center lg:justify-start">
                            <a
                                href="#projects"
                                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white font-medium rounded-lg shadow-lg transition-all duration-300 flex items-center justify-center gap-2 group"
                            >
                                "View Projects"
                                <span class="group-hover:translate-x-1 transition-transform">
                                    "→"
                                </span>
                            </a>
                            <a
                                href="#contact"
                                class="px-6 py-3 border-2 border-blue-600 text-blue-600 dark:text-blue-400 font-medium rounded-lg hover:bg-blue-50 dark:hover:bg-blue-900/30 transition-all duration-300"
                            >
                                "Contact Me"
                            </a>
                        </div>
                    </Reveal>
                    <Reveal index=4 delay_ms=200>
                        <div class="flex justify-center lg:justify-start gap-4 mt-8">
                            {socials
                                .into_iter()
                                .map(|social| {
                                    view! {
                                        <a
                                            href=social.url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="text-gray-700 dark:text-gray-300 hover:text-blue-600 hover:-translate-y-1 transition p-2 text-xl"
                                            aria-label=social.name
                                        >
                                            <i class=social.icon />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>
                </div>
                <div class="hidden lg:block">
                    <div class="relative w-full h-96 bg-gradient-to-br from-blue-100 to-blue-200 dark:from-gray-700 dark:to-gray-600 rounded-2xl overflow-hidden shadow-2xl">
                        <img
                            src=profile.portrait.clone()
                            alt=portrait_alt
                            class="absolute inset-0 w-full h-full object-cover"
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}
