//! Slide-up info card for the currently selected star.

use leptos::prelude::*;

use starfield::field::Star;

/// Info card shown while a star is selected.
///
/// Displays the star's rounded coordinates; any click on the card clears
/// the selection.
#[component]
pub fn StarCard(selected: RwSignal<Option<Star>>) -> impl IntoView {
    move || {
        selected.get().map(|star| {
            #[allow(clippy::cast_possible_truncation)]
            let x = star.x.round() as i64;
            #[allow(clippy::cast_possible_truncation)]
            let y = star.y.round() as i64;
            view! {
                <div class="star-card" on:click=move |_| selected.set(None)>
                    <h2>"Star notes"</h2>
                    <p>{format!("This star sits at x: {x}, y: {y}.")}</p>
                    <p>"Add your notes about this star here."</p>
                    <p>"(click to close)"</p>
                </div>
            }
        })
    }
}
