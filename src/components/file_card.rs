//! Card component for one file listing entry.

use leptos::prelude::*;

use crate::net::types::FileRecord;

/// Renders the name, type, and uploader of a stored file.
#[component]
pub fn FileCard(file: FileRecord) -> impl IntoView {
    view! {
        <li class="file-card">
            <p>
                <strong>"Name: "</strong>
                {file.name}
            </p>
            <p>
                <strong>"Type: "</strong>
                {file.kind}
            </p>
            <p>
                <strong>"Uploaded By: "</strong>
                {file.uploaded_by}
            </p>
        </li>
    }
}
