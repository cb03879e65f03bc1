//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::pages::{auth::AuthPage, drop_files::DropFilesPage, home::HomePage};
use crate::state::files::FilesState;
use crate::state::session::{self, Session};
use crate::util::guard::{self, Target};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Restores the persisted session synchronously before the first guard
/// evaluation, then provides it to every route through context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(session::restore());
    let files = RwSignal::new(FilesState::default());

    provide_context(session);
    provide_context(files);

    view! {
        <Stylesheet id="leptos" href="/pkg/amber-client.css"/>
        <Title text="Amber"/>

        <Router>
            <Routes fallback=|| view! { <UnknownRedirect/> }>
                <Route path=StaticSegment("") view=RootRedirect/>
                <Route path=StaticSegment("login") view=|| view! { <AuthPage/> }/>
                <Route path=StaticSegment("signup") view=|| view! { <AuthPage signup=true/> }/>
                <Route path=StaticSegment("home") view=HomePage/>
                <Route path=StaticSegment("drop-files") view=DropFilesPage/>
            </Routes>
        </Router>
    }
}

/// Root target: the guard redirects both session states away.
#[component]
fn RootRedirect() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    guard::install_guard(Target::Root, session, use_navigate());
    view! { <p class="redirect-placeholder">"Redirecting..."</p> }
}

/// Fallback for unknown paths: send the user back to the root target.
#[component]
fn UnknownRedirect() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    guard::install_guard(Target::Unknown, session, use_navigate());
    view! { <p class="redirect-placeholder">"Redirecting..."</p> }
}
