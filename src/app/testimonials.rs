use leptos::prelude::*;

use super::reveal::Reveal;
use crate::content::Testimonial;

const TESTIMONIAL_STAGGER_DELAY_MS: u64 = 300;

#[component]
pub fn Testimonials(testimonials: Vec<Testimonial>) -> impl IntoView {
    view! {
        <section
            id="testimonials"
            class="pt-2 py-10 bg-gradient-to-b from-gray-50 to-white dark:from-gray-900 dark:to-gray-800"
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <Reveal class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-gray-900 dark:text-white mb-4">
                        "Client " <span class="text-blue-600 dark:text-blue-400">"Testimonials"</span>
                    </h2>
                    <p class="text-lg text-gray-600 dark:text-gray-300 max-w-2xl mx-auto">
                        "What my clients say about working with me"
                    </p>
                </Reveal>
                <div class="grid gap-8 md:grid-cols-3">
                    {testimonials
                        .into_iter()
                        .enumerate()
                        .map(|(i, item)| {
                            let stars = item
                                .stars()
                                .into_iter()
                                .map(|filled| {
                                    let class = if filled {
                                        "text-yellow-500"
                                    } else {
                                        "text-gray-300 dark:text-gray-600"
                                    };
                                    view! { <span class=class>"★"</span> }
                                })
                                .collect_view();
                            view! {
                                <Reveal index=i delay_ms=TESTIMONIAL_STAGGER_DELAY_MS>
                                    <div class="bg-white dark:bg-gray-800 shadow-lg rounded-xl p-8 hover:shadow-xl hover:-translate-y-2 transition-all duration-300">
                                        <div class="flex items-center gap-4 mb-6">
                                            <div class="relative w-16 h-16 rounded-full overflow-hidden border-4 border-blue-100 dark:border-blue-900/30">
                                                <img
                                                    src=item.avatar
                                                    alt=item.name.clone()
                                                    class="w-full h-full object-cover"
                                                />
                                            </div>
                                            <div>
                                                <h4 class="font-bold text-gray-900 dark:text-white">
                                                    {item.name}
                                                </h4>
                                                <p class="text-blue-600 dark:text-blue-400 text-sm">
                                                    {item.position}
                                                </p>
                                                <p class="text-gray-500 dark:text-gray-400 text-xs">
                                                    "Project: " {item.project}
                                                </p>
                                            </div>
                                        </div>
                                        <p class="text-gray-700 dark:text-gray-300 mb-6 italic">
                                            "\"" {item.feedback} "\""
                                        </p>
                                        <div
                                            class="flex gap-1"
                                            aria-label=format!("{} out of 5 stars", item.rating.min(5))
                                        >
                                            {stars}
                                        </div>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
