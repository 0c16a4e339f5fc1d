use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

const STAGGER_MS: u64 = 100;

/// Content starts hidden only once the browser has taken over.
fn reveal_class(class: &str, armed: bool, shown: bool) -> String {
    match (armed, shown) {
        (false, _) => class.to_string(),
        (true, false) => format!("reveal {class}"),
        (true, true) => format!("reveal reveal-visible {class}"),
    }
}

/// Fades its children in the first time they scroll into view.
///
/// Siblings pass their position as `index` to stagger their entrance.
#[component]
pub fn Reveal(
    #[prop(optional)] index: usize,
    #[prop(optional)] delay_ms: u64,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(node);
    // effects only run in the browser, so server output is never hidden
    let (armed, set_armed) = signal(false);
    let (shown, set_shown) = signal(false);

    // latch: once revealed, stay revealed
    Effect::new(move |_| {
        set_armed.set(true);
        if visible.get() {
            set_shown.set(true);
        }
    });

    let delay = delay_ms + index as u64 * STAGGER_MS;
    view! {
        <div
            node_ref=node
            class=move || reveal_class(&class, armed.get(), shown.get())
            style=format!("transition-delay: {delay}ms")
        >
            {children()}
        </div>
    }
}
