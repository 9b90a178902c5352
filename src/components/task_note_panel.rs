//! Task Note Panel
//!
//! Inline note editor under a task row with side-by-side edit and preview.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::DeleteConfirmButton;
use crate::context::Flash;
use crate::markdown::parse_markdown;
use crate::models::SaveTaskNoteRequest;
use crate::services;

#[component]
pub fn TaskNotePanel(
    task_id: i64,
    task_title: String,
    flash: Flash,
    /// Told whether a note exists after save or delete
    #[prop(into)]
    on_changed: Callback<bool>,
) -> impl IntoView {
    let (content, set_content) = signal(String::new());
    let (tags, set_tags) = signal(String::new());
    let (saving, set_saving) = signal(false);

    // Missing notes come back as the empty fallback
    spawn_local(async move {
        match services::task_note(task_id).await {
            Ok(note) => {
                on_changed.run(!note.is_empty());
                set_content.set(note.note_content);
                set_tags.set(note.reminder_tags.join(", "));
            }
            Err(e) => log::warn!("Failed to load note for task {}: {}", task_id, e),
        }
    });

    let save = move |_| {
        let request = SaveTaskNoteRequest {
            task_id,
            note_name: Some(task_title.clone()),
            note_content: content.get_untracked(),
            reminder_tags: tags
                .get_untracked()
                .split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
        };
        set_saving.set(true);
        spawn_local(async move {
            match services::save_task_note(&request).await {
                Ok(_) => {
                    flash.show("Note saved");
                    on_changed.run(true);
                }
                Err(e) => {
                    log::error!("Failed to save note: {}", e);
                    flash.show(format!("Failed to save note: {}", e));
                }
            }
            set_saving.set(false);
        });
    };

    let delete = move |_: ()| {
        spawn_local(async move {
            match services::delete_task_note(task_id).await {
                Ok(()) => {
                    set_content.set(String::new());
                    set_tags.set(String::new());
                    on_changed.run(false);
                }
                Err(e) => flash.show(format!("Failed to delete note: {}", e)),
            }
        });
    };

    let rendered_html = move || parse_markdown(&content.get());

    view! {
        <div class="note-panel">
            <div class="note-panel-body">
                <div class="note-edit-pane">
                    <div class="pane-header">"Edit"</div>
                    <textarea
                        class="note-textarea"
                        placeholder="Write Markdown..."
                        prop:value=move || content.get()
                        on:input=move |ev| set_content.set(event_target_value(&ev))
                    ></textarea>
                    <input
                        type="text"
                        class="note-tags"
                        placeholder="Reminder tags, comma separated"
                        prop:value=move || tags.get()
                        on:input=move |ev| set_tags.set(event_target_value(&ev))
                    />
                </div>
                <div class="note-preview-pane">
                    <div class="pane-header">"Preview"</div>
                    <div class="note-preview-content" inner_html=rendered_html></div>
                </div>
            </div>
            <div class="note-panel-actions">
                <button type="button" class="primary-btn small" disabled=move || saving.get() on:click=save>
                    {move || if saving.get() { "Saving..." } else { "Save Note" }}
                </button>
                <DeleteConfirmButton button_class="secondary-btn small" label="Delete Note" on_confirm=delete />
            </div>
        </div>
    }
}
