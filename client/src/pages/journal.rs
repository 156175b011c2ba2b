//! Journal page — placeholder second route.

use leptos::prelude::*;

/// Journal page. Constellation diary entries are server-backed and not
/// wired up yet.
#[component]
pub fn JournalPage() -> impl IntoView {
    view! {
        <div class="journal-page">
            <h1>"Star journal"</h1>
            <p>"Constellation entries will appear here."</p>
            <a class="journal-page__back" href="/">"Back to the sky"</a>
        </div>
    }
}
