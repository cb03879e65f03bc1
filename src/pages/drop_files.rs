//! Focused upload screen for dropping files into the service.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::FileType;
use crate::state::files::FilesState;
use crate::state::session::Session;
use crate::util::guard::{self, Target};

/// Protected upload-only screen; search and the listing stay on the
/// dashboard.
#[component]
pub fn DropFilesPage() -> impl IntoView {
    let session_ctx = expect_context::<RwSignal<Session>>();
    let files = expect_context::<RwSignal<FilesState>>();
    guard::install_guard(Target::DropFiles, session_ctx, use_navigate());

    let file_type = RwSignal::new(FileType::Image);
    let notice = RwSignal::new(String::new());
    let file_input: NodeRef<leptos::html::Input> = NodeRef::new();

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
                if uploaded {
                    notice.set("File uploaded successfully!".to_owned());
                    if let Some(input) = file_input.get_untracked() {
                        input.set_value("");
                    }
                }
            });
        }
    };

    view! {
        <div class="drop-page">
            <div class="drop-card">
                <h2>"Upload Files"</h2>
                <Show when=move || files.get().error.is_some()>
                    <p class="drop-card__error">
                        {move || files.get().error.unwrap_or_default()}
                    </p>
                </Show>
                <Show when=move || !notice.get().is_empty()>
                    <p class="drop-card__notice">{move || notice.get()}</p>
                </Show>
                <div class="drop-card__controls">
                    <select
                        class="drop-card__select"
                        on:change=move |ev| {
                            file_type.set(FileType::from_choice(&event_target_value(&ev)));
                        }
                    >
                        <option value="image">"Image"</option>
                        <option value="pdf">"PDF"</option>
                    </select>
                    <input class="drop-card__file" type="file" node_ref=file_input/>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| run_upload()
                        disabled=move || files.get().upload_loading
                    >
                        "Upload"
                    </button>
                </div>
                <a class="drop-card__back" href="/home">
                    "Back to dashboard"
                </a>
            </div>
        </div>
    }
}
