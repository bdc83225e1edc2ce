use leptos::prelude::*;

/// Brain-circuit mark shown in the page header
#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <svg
            class="logo"
            xmlns="http://www.w3.org/2000/svg"
            width="40"
            height="40"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d="M12 4.5a2.5 2.5 0 0 0-4.96-.46 2.5 2.5 0 0 0-1.98 3 2.5 2.5 0 0 0-1.32 4.24 3 3 0 0 0 .34 5.58 2.5 2.5 0 0 0 2.96 3.08A2.5 2.5 0 0 0 12 19.5Z"/>
            <path d="M16 8V5c0-1.1.9-2 2-2"/>
            <path d="M12 13h4"/>
            <path d="M12 18h6a2 2 0 0 1 2 2v1"/>
            <path d="M12 8h8"/>
            <circle cx="16" cy="13" r=".5"/>
            <circle cx="18" cy="3" r=".5"/>
            <circle cx="20" cy="21" r=".5"/>
            <circle cx="20" cy="8" r=".5"/>
        </svg>
    }
}
