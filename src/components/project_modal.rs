//! Project Modal Component
//!
//! Create/edit dialog with member search and document staging. The right
//! pane previews the chosen members and files.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DocumentPicker, PrioritySelect, UserSearch};
use crate::config::AppConfig;
use crate::format::file_size;
use crate::forms::{oversized_message, ProjectForm, StagedDocument};
use crate::models::{Priority, Project};
use crate::services;

#[component]
pub fn ProjectModal(
    /// Project being edited; `None` creates a new one
    project: Option<Project>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_saved: Callback<Project>,
) -> impl IntoView {
    let config = AppConfig::from_build_env();
    let max_bytes = config.max_document_bytes;
    let editing_id = project.as_ref().map(|p| p.id);
    let is_edit = editing_id.is_some();

    let form = RwSignal::new(project.as_ref().map(ProjectForm::from_project).unwrap_or_default());
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let snapshot = form.get_untracked();
        let request = match snapshot.validate() {
            Ok(request) => request,
            Err(message) => {
                set_error.set(Some(message));
                return;
            }
        };
        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = match editing_id {
                Some(id) => services::update_project(id, &request, &snapshot.documents).await,
                None => services::create_project(&request, &snapshot.documents).await,
            };
            set_saving.set(false);
            match result {
                Ok(saved) => {
                    on_saved.run(saved);
                    on_close.run(());
                }
                Err(e) => {
                    log::error!("Project save error: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let stage = move |documents: Vec<StagedDocument>| {
        let mut rejected = Vec::new();
        form.update(|f| rejected = f.stage_documents(documents, max_bytes));
        if !rejected.is_empty() {
            set_error.set(Some(oversized_message(&rejected, max_bytes)));
        }
    };

    let picked = Signal::derive(move || form.with(|f| f.member_emails.clone()));

    view! {
        <div class="modal-overlay">
            <div class="modal modal-wide">
                // Left: form
                <div class="modal-main">
                    <div class="modal-header">
                        <h2>{if is_edit { "Edit Project" } else { "Create New Project" }}</h2>
                        <button type="button" class="close-btn" on:click=move |_| on_close.run(())>"×"</button>
                    </div>

                    {move || error.get().map(|e| view! { <div class="form-error">{e}</div> })}

                    <form class="modal-form" on:submit=on_submit>
                        <label class="form-field">
                            <span>"Project Name"</span>
                            <input
                                type="text"
                                required
                                placeholder="Enter project name"
                                prop:value=move || form.with(|f| f.name.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.name = value);
                                }
                            />
                        </label>

                        <label class="form-field">
                            <span>"Description"</span>
                            <textarea
                                rows="3"
                                placeholder="Enter project description"
                                prop:value=move || form.with(|f| f.description.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.description = value);
                                }
                            ></textarea>
                        </label>

                        <div class="form-row">
                            <label class="form-field">
                                <span>"Priority"</span>
                                <PrioritySelect
                                    value=Signal::derive(move || form.with(|f| f.priority))
                                    on_change=move |p: Priority| form.update(|f| f.priority = p)
                                />
                            </label>
                            <label class="form-field">
                                <span>"Deadline"</span>
                                <input
                                    type="date"
                                    prop:value=move || form.with(|f| f.deadline.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|f| f.deadline = value);
                                    }
                                />
                            </label>
                        </div>

                        <div class="form-field">
                            <span>"Add Team Members"</span>
                            <UserSearch
                                picked=picked
                                on_select=move |email: String| {
                                    form.update(|f| {
                                        f.add_member(&email);
                                    });
                                }
                            />
                        </div>

                        <label class="form-checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || form.with(|f| f.send_email)
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    form.update(|f| f.send_email = checked);
                                }
                            />
                            <span>"Send email invitations to members"</span>
                        </label>

                        <div class="form-field">
                            <span>"Attach Documents"</span>
                            <DocumentPicker
                                max_bytes=max_bytes
                                on_files=stage
                                on_error=move |message: String| set_error.set(Some(message))
                            />
                        </div>

                        <div class="modal-actions">
                            <button type="button" class="secondary-btn" on:click=move |_| on_close.run(())>
                                "Cancel"
                            </button>
                            <button type="submit" class="primary-btn" disabled=move || saving.get()>
                                {move || {
                                    if saving.get() {
                                        "Saving..."
                                    } else if is_edit {
                                        "Save Changes"
                                    } else {
                                        "Create Project"
                                    }
                                }}
                            </button>
                        </div>
                    </form>
                </div>

                // Right: preview
                <aside class="modal-preview">
                    <h3>"Team Members"</h3>
                    {move || {
                        let emails = form.with(|f| f.member_emails.clone());
                        if emails.is_empty() {
                            view! { <p class="muted">"No members added yet"</p> }.into_any()
                        } else {
                            view! {
                                <ul class="preview-list">
                                    {emails.into_iter().map(|email| {
                                        let to_remove = email.clone();
                                        view! {
                                            <li class="preview-item">
                                                <span class="avatar">{email.chars().next().map(|c| c.to_ascii_uppercase()).unwrap_or('?')}</span>
                                                <span>{email}</span>
                                                <button
                                                    type="button"
                                                    class="remove-btn"
                                                    on:click=move |_| form.update(|f| f.remove_member(&to_remove))
                                                >
                                                    "×"
                                                </button>
                                            </li>
                                        }
                                    }).collect_view()}
                                </ul>
                            }.into_any()
                        }
                    }}

                    <h3>"Documents"</h3>
                    {move || {
                        let docs: Vec<(String, u64)> = form.with(|f| {
                            f.documents.iter().map(|d| (d.name.clone(), d.size())).collect()
                        });
                        if docs.is_empty() {
                            view! { <p class="muted">"No documents attached"</p> }.into_any()
                        } else {
                            view! {
                                <ul class="preview-list">
                                    {docs.into_iter().enumerate().map(|(index, (name, size))| view! {
                                        <li class="preview-item">
                                            <span class="file-name">{name}</span>
                                            <span class="muted">{file_size(size)}</span>
                                            <button
                                                type="button"
                                                class="remove-btn"
                                                on:click=move |_| form.update(|f| f.remove_document(index))
                                            >
                                                "×"
                                            </button>
                                        </li>
                                    }).collect_view()}
                                </ul>
                            }.into_any()
                        }
                    }}
                </aside>
            </div>
        </div>
    }
}
