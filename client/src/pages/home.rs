//! Home page: the night-sky background, the star field, header chrome, and
//! the selected-star card.

use leptos::prelude::*;

use starfield::field::Star;

use crate::components::star_card::StarCard;
use crate::components::starfield_host::StarfieldHost;
use crate::state::session::SessionState;

/// Home page hosting the animated star field.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let selected = RwSignal::new(None::<Star>);

    let on_login = move |_| session.update(SessionState::log_in);

    view! {
        <div class="night-sky"></div>
        <StarfieldHost selected=selected/>
        <header class="home-header">
            <button class="home-header__link" on:click=on_login>
                {move || if session.get().logged_in { "Signed in" } else { "Sign in" }}
            </button>
            <a class="home-header__link" href="/journal">"Journal"</a>
        </header>
        <StarCard selected=selected/>
    }
}
