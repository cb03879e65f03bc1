//! Dashboard navigation rail.

use leptos::prelude::*;

/// Sidebar with the dashboard actions. The admin entry appears only once
/// the permission check has confirmed the flag.
#[component]
pub fn Sidebar(
    is_admin: Signal<bool>,
    on_search: Callback<()>,
    on_logout: Callback<()>,
) -> impl IntoView {
    view! {
        <nav class="sidebar">
            <div class="sidebar__title">"Dashboard"</div>
            <ul class="sidebar__actions">
                <li>
                    <button class="sidebar__button" on:click=move |_| on_search.run(())>
                        "Search Files"
                    </button>
                </li>
                <li>
                    <a class="sidebar__button" href="/drop-files">
                        "Upload Files"
                    </a>
                </li>
                <Show when=move || is_admin.get()>
                    <li>
                        <button class="sidebar__button">"Admin Tools"</button>
                    </li>
                </Show>
            </ul>
            <button class="sidebar__logout" on:click=move |_| on_logout.run(())>
                "Logout"
            </button>
        </nav>
    }
}
