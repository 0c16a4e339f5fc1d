use leptos::prelude::*;

use super::reveal::Reveal;
use crate::accordion::Accordion;
use crate::content::Faq;

#[component]
pub fn FaqSection(faqs: Vec<Faq>) -> impl IntoView {
    let accordion = RwSignal::new(Accordion::default());

    view! {
        <section id="faq" class="py-2 bg-gray-50 dark:bg-gray-900">
            <div class="max-w-4xl mx-auto px-4 sm:px-6">
                <Reveal class="text-center mb-12">
                    <h2 class="text-4xl md:text-5xl font-bold text-gray-900 dark:text-white mb-4">
                        "Frequently Asked "
                        <span class="text-blue-600 dark:text-blue-400">"Questions"</span>
                    </h2>
                    <p class="text-lg text-gray-600 dark:text-gray-300 max-w-2xl mx-auto">
                        "Find answers to common questions about my services and process"
                    </p>
                </Reveal>
                <div class="space-y-4">
                    {faqs
                        .into_iter()
                        .enumerate()
                        .map(|(i, faq)| {
                            let is_open = move || accordion.with(|a| a.is_open(i));
                            let panel_id = format!("faq-{i}");
                            view! {
                                <Reveal index=i>
                                    <div class="border border-gray-200 dark:border-gray-700 rounded-xl overflow-hidden bg-white dark:bg-gray-800 hover:shadow-md transition-all duration-300">
                                        <button
                                            class="flex justify-between items-center w-full text-left p-6 focus:outline-none"
                                            aria-expanded=move || is_open().to_string()
                                            aria-controls=panel_id.clone()
                                            on:click=move |_| accordion.update(|a| a.toggle(i))
                                        >
                                            <span class="text-lg md:text-xl font-medium text-gray-800 dark:text-white">
                                                {faq.question}
                                            </span>
                                            <span class="text-blue-600 dark:text-blue-400">
                                                {move || if is_open() { "▲" } else { "▼" }}
                                            </span>
                                        </button>
                                        <div
                                            id=panel_id
                                            class="px-6"
                                            hidden=move || !is_open()
                                        >
                                            <p class="pb-6 text-gray-600 dark:text-gray-300">
                                                {faq.answer}
                                            </p>
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
