//! Document Picker Component
//!
//! File input that reads the chosen files into memory for staging. Files
//! over the size limit are skipped before anything is read.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;

use crate::error::ApiError;
use crate::format::file_size;
use crate::forms::{oversized_message, split_by_size, StagedDocument};

async fn read_file(file: web_sys::File) -> Result<StagedDocument, ApiError> {
    let name = file.name();
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| ApiError::FileRead { name: name.clone() })?;
    Ok(StagedDocument {
        name,
        mime: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}

/// Multi-file picker; `on_files` receives every file that could be read
#[component]
pub fn DocumentPicker(
    #[prop(into)] on_files: Callback<Vec<StagedDocument>>,
    /// Per-file limit, checked against the browser-reported size
    max_bytes: u64,
    #[prop(into, optional)] on_error: Option<Callback<String>>,
    #[prop(into, default = "Upload files".to_string())] label: String,
) -> impl IntoView {
    let on_change = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let Some(list) = input.files() else { return };
        let picked: Vec<web_sys::File> = (0..list.length()).filter_map(|i| list.get(i)).collect();
        // Reset so picking the same file again still fires change
        input.set_value("");

        let (files, rejected) = split_by_size(picked, max_bytes, |f| f.size() as u64, |f| f.name());
        if !rejected.is_empty() {
            let message = oversized_message(&rejected, max_bytes);
            log::warn!("{}", message);
            if let Some(on_error) = on_error {
                on_error.run(message);
            }
        }
        if files.is_empty() {
            return;
        }

        spawn_local(async move {
            let mut staged = Vec::with_capacity(files.len());
            for file in files {
                match read_file(file).await {
                    Ok(document) => staged.push(document),
                    Err(e) => {
                        log::error!("{}", e);
                        if let Some(on_error) = on_error {
                            on_error.run(e.to_string());
                        }
                    }
                }
            }
            if !staged.is_empty() {
                on_files.run(staged);
            }
        });
    };

    view! {
        <label class="document-picker">
            <span class="document-picker-label">{label}</span>
            <input type="file" multiple class="sr-only" on:change=on_change />
            <p class="document-picker-hint">{format!("PDF, DOC, DOCX up to {} each", file_size(max_bytes))}</p>
        </label>
    }
}
