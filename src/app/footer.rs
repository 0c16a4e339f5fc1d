use chrono::{DateTime, Datelike};
use leptos::prelude::*;

use crate::content::{NavItem, Profile, SocialLink};

fn build_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|t| t.year())
}

#[component]
pub fn Footer(profile: Profile, nav: Vec<NavItem>, socials: Vec<SocialLink>) -> impl IntoView {
    let copyright = match build_year() {
        Some(year) => format!("© {year} {}. All rights reserved.", profile.name),
        None => format!("© {}. All rights reserved.", profile.name),
    };

    view! {
        <footer class="bg-white dark:bg-gray-900 text-gray-700 dark:text-gray-300 border-t border-gray-200 dark:border-gray-700 mt-20">
            <div class="max-w-6xl mx-auto px-6 py-10 grid grid-cols-1 md:grid-cols-3 gap-8">
                <div>
                    <h3 class="text-xl font-bold mb-2 text-gray-900 dark:text-white">
                        {profile.name.clone()}
                    </h3>
                    <p class="text-sm">
                        {profile.role.clone()}
                        " passionate about building accessible, responsive, and delightful web experiences."
                    </p>
                </div>
                <div>
                    <h4 class="text-md font-semibold mb-2 text-gray-900 dark:text-white">
                        "Quick Links"
                    </h4>
                    <ul class="space-y-2">
                        {nav
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <li>
                                        <a href=item.href class="hover:underline">
                                            {item.name}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div>
                    <h4 class="text-md font-semibold mb-2 text-gray-900 dark:text-white">
                        "Social"
                    </h4>
                    <ul class="space-y-2">
                        {socials
                            .into_iter()
                            .map(|social| {
                                view! {
                                    <li>
                                        <a
                                            href=social.url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="hover:underline"
                                        >
                                            {social.name}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                        <li>
                            <a href=format!("mailto:{}", profile.email) class="hover:underline">
                                "Email"
                            </a>
                        </li>
                    </ul>
                </div>
            </div>
            <div class="text-center py-6 text-sm border-t border-gray-200 dark:border-gray-700">
                {copyright}
            </div>
        </footer>
    }
}
