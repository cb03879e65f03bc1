//! Dashboard screen: permission check, file search, upload, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated landing route. It verifies the caller's admin scope
//! once on mount, then serves search and upload actions using the session
//! credential as a bearer token. Overlapping calls resolve last-writer-wins
//! on the shared files state.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::file_card::FileCard;
use crate::components::sidebar::Sidebar;
use crate::net::types::FileType;
use crate::state::files::FilesState;
use crate::state::session::{self, Session};
use crate::util::guard::{self, Target};

/// Dashboard page. Redirects to `/login` whenever the session is not
/// authenticated.
#[component]
pub fn HomePage() -> impl IntoView {
    let session_ctx = expect_context::<RwSignal<Session>>();
    let files = expect_context::<RwSignal<FilesState>>();
    guard::install_guard(Target::Home, session_ctx, use_navigate());

    let search_term = RwSignal::new(String::new());
    let file_type = RwSignal::new(FileType::Image);
    let notice = RwSignal::new(String::new());
    let file_input: NodeRef<leptos::html::Input> = NodeRef::new();

    // Verify the caller's scope once on mount.
    let permissions_checked = RwSignal::new(false);
    Effect::new(move || {
        if permissions_checked.get() {
            return;
        }
        let session = session_ctx.get();
        let Some((credential, _)) = session.parts() else {
            return;
        };
        let credential = credential.to_owned();
        permissions_checked.set(true);
        files.update(FilesState::begin_permissions);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::files::check_permissions(&credential).await;
            files.update(|state| state.finish_permissions(result));
        });
    });

    let run_search = move || {
        let session = session_ctx.get_untracked();
        let Some((credential, _)) = session.parts() else {
            return;
        };
        let credential = credential.to_owned();
        let is_admin = files.get_untracked().is_admin;
        files.update(FilesState::begin_search);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::files::search_files(&credential, is_admin).await;
            files.update(|state| state.finish_search(result));
        });
    };

    let run_upload = move || {
        notice.set(String::new());
        #[cfg(feature = "hydrate")]
        {
            let session = session_ctx.get_untracked();
            let Some((credential, label)) = session.parts() else {
                return;
            };
            let picked = file_input
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|list| list.get(0));
            let Some(file) = picked else {
                files.update(|state| {
                    state.error = Some("Please select a file to upload".to_owned());
                });
                return;
            };
            let credential = credential.to_owned();
            let label = label.to_owned();
            let kind = file_type.get_untracked();
            files.update(FilesState::begin_upload);

            leptos::task::spawn_local(async move {
                let result =
                    crate::net::files::upload_file(&credential, &label, kind, &file).await;
                let uploaded = result.is_ok();
                files.update(|state| state.finish_upload(result));
                if !uploaded {
                    return;
                }
                notice.set("File uploaded successfully!".to_owned());
                if let Some(input) = file_input.get_untracked() {
                    input.set_value("");
                }
                // Refresh the listing so the new file shows up.
                let is_admin = files.get_untracked().is_admin;
                files.update(FilesState::begin_search);
                let refreshed = crate::net::files::search_files(&credential, is_admin).await;
                files.update(|state| state.finish_search(refreshed));
            });
        }
    };

    let on_search = Callback::new(move |()| run_search());
    let on_logout = Callback::new(move |()| {
        // Clearing the session flips the guard, which leaves for /login.
        session_ctx.set(session::clear());
    });

    view! {
        <div class="home-page">
            <Sidebar
                is_admin=Signal::derive(move || files.get().is_admin)
                on_search=on_search
                on_logout=on_logout
            />
            <main class="home-page__content">
                <section class="home-page__section">
                    <h2>"Search Files"</h2>
                    <div class="home-page__controls">
                        <input
                            class="home-page__input"
                            type="text"
                            placeholder="Search term"
                            prop:value=move || search_term.get()
                            on:input=move |ev| search_term.set(event_target_value(&ev))
                        />
                        <button class="btn" on:click=move |_| on_search.run(())>
                            "Search"
                        </button>
                    </div>
                </section>

                <section class="home-page__section">
                    <h2>"Upload Files"</h2>
                    <div class="home-page__controls">
                        <select
                            class="home-page__select"
                            on:change=move |ev| {
                                file_type.set(FileType::from_choice(&event_target_value(&ev)));
                            }
                        >
                            <option value="image">"Image"</option>
                            <option value="pdf">"PDF"</option>
                        </select>
                        <input class="home-page__file" type="file" node_ref=file_input/>
                        <button
                            class="btn btn--primary"
                            on:click=move |_| run_upload()
                            disabled=move || files.get().upload_loading
                        >
                            "Upload"
                        </button>
                    </div>
                    <Show when=move || !notice.get().is_empty()>
                        <p class="home-page__notice">{move || notice.get()}</p>
                    </Show>
                </section>

                <section class="home-page__section">
                    <h2>"Files"</h2>
                    <Show when=move || files.get().error.is_some()>
                        <p class="home-page__error">
                            {move || files.get().error.unwrap_or_default()}
                        </p>
                    </Show>
                    <Show
                        when=move || !files.get().search_loading
                        fallback=move || view! { <p>"Loading files..."</p> }
                    >
                        <Show
                            when=move || !files.get().items.is_empty()
                            fallback=move || view! { <p>"No files found"</p> }
                        >
                            <ul class="home-page__files">
                                {move || {
                                    files
                                        .get()
                                        .items
                                        .into_iter()
                                        .map(|file| view! { <FileCard file=file/> })
                                        .collect::<Vec<_>>()
                                }}
                            </ul>
                        </Show>
                    </Show>
                </section>
            </main>
        </div>
    }
}
