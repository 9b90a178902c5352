//! Log Panel Component
//!
//! Collapsible view of the recent lines kept by the console logger.

use leptos::prelude::*;

/// Last `limit` lines, oldest first
pub fn tail(mut lines: Vec<String>, limit: usize) -> Vec<String> {
    let skip = lines.len().saturating_sub(limit);
    lines.drain(..skip);
    lines
}

fn recent_lines(limit: usize) -> Vec<String> {
    console_logger::global()
        .map(|logger| tail(logger.recent(), limit))
        .unwrap_or_default()
}

#[component]
pub fn LogPanel(#[prop(default = 50)] limit: usize) -> impl IntoView {
    let (open, set_open) = signal(false);
    let (lines, set_lines) = signal(Vec::<String>::new());
    let refresh = move || set_lines.set(recent_lines(limit));

    view! {
        <section class="log-panel">
            <div class="section-header">
                <button
                    type="button"
                    class="link-btn"
                    on:click=move |_| {
                        if !open.get_untracked() {
                            refresh();
                        }
                        set_open.update(|o| *o = !*o);
                    }
                >
                    {move || if open.get() { "Hide recent activity" } else { "Show recent activity" }}
                </button>
                <Show when=move || open.get()>
                    <button type="button" class="secondary-btn small" on:click=move |_| refresh()>
                        "Refresh"
                    </button>
                </Show>
            </div>
            <Show when=move || open.get()>
                {move || {
                    let current = lines.get();
                    if current.is_empty() {
                        view! { <p class="muted">"Nothing logged yet"</p> }.into_any()
                    } else {
                        view! { <pre class="log-lines">{current.join("\n")}</pre> }.into_any()
                    }
                }}
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("line {}", i)).collect()
    }

    #[test]
    fn test_tail_keeps_newest_lines() {
        assert_eq!(tail(lines(5), 2), vec!["line 4".to_string(), "line 5".to_string()]);
    }

    #[test]
    fn test_tail_shorter_than_limit_is_unchanged() {
        assert_eq!(tail(lines(2), 10), lines(2));
        assert!(tail(Vec::new(), 3).is_empty());
    }
}
