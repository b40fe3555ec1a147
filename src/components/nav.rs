//! Navigation Component

use leptos::*;
use leptos_router::*;

use crate::state::GlobalState;

/// Navigation header
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let user_name = state.user_name;

    view! {
        <nav class="navbar">
            <A href="/" class="brand">
                <span class="brand-icon">"🩸"</span>
                <span>"GlucoVision"</span>
            </A>

            <div class="nav-links">
                <NavLink href="/" label="Dashboard" />
                <NavLink href="/weekly-analysis" label="Weekly Analysis" />
                <NavLink href="/settings" label="Settings" />
            </div>

            <span class="greeting">
                {move || user_name.get().map(|name| format!("Hi, {}", name))}
            </span>
        </nav>
    }
}

#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <A href=href class="nav-link">
            {label}
        </A>
    }
}
