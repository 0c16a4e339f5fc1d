use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::accordion::MenuToggle;
use crate::content::NavItem;

const SCROLLED_OFFSET: f64 = 50.0;

#[component]
pub fn Navbar(brand: String, items: Vec<NavItem>) -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let scrolled = move || scroll_y.get() > SCROLLED_OFFSET;
    let menu = RwSignal::new(MenuToggle::default());
    let menu_open = move || menu.with(MenuToggle::is_open);

    let mobile_items = items.clone();

    view! {
        <header class=move || {
            if scrolled() {
                "fixed top-0 w-full z-50 transition-all backdrop-blur-lg bg-white/70 dark:bg-gray-900/70 shadow"
            } else {
                "fixed top-0 w-full z-50 transition-all backdrop-blur-lg bg-transparent"
            }
        }>
            <div class="max-w-6xl mx-auto px-4 py-5 flex items-center justify-between">
                <h1 class="text-xl font-bold text-gray-800 dark:text-white">{brand}</h1>
                <nav class="hidden md:flex space-x-6">
                    {items
                        .into_iter()
                        .map(|item| {
                            view! {
                                <a
                                    href=item.href
                                    class="text-sm font-medium text-gray-700 dark:text-gray-300 hover:text-blue-600 dark:hover:text-blue-400 transition"
                                >
                                    {item.name}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <button
                    class="md:hidden text-gray-700 dark:text-white text-2xl"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open().to_string()
                    on:click=move |_| menu.update(MenuToggle::toggle)
                >
                    {move || if menu_open() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=menu_open>
                <div class="md:hidden px-4 pb-4 space-y-2 bg-white/70 dark:bg-gray-900/70 backdrop-blur-md">
                    {mobile_items
                        .iter()
                        .map(|item| {
                            view! {
                                <a
                                    href=item.href.clone()
                                    class="block text-sm font-medium text-gray-700 dark:text-gray-300 hover:text-blue-600"
                                    on:click=move |_| menu.update(MenuToggle::close)
                                >
                                    {item.name.clone()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </header>
    }
}
