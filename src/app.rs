//! Marketplace Frontend App
//!
//! Root component wiring the listing form to the item list.

use leptos::prelude::*;

use crate::components::{ItemList, Listing};

#[component]
pub fn App() -> impl IntoView {
    // True at mount so the first render fetches. A completed listing
    // flips it back on; the list resets it once it has refreshed.
    let (reload, set_reload) = signal(true);

    let on_load_completed = Callback::new(move |()| set_reload.set(false));
    let on_listing_completed = Callback::new(move |()| set_reload.set(true));

    view! {
        <div class="App">
            <header class="Title">
                <p><b>"Simple Marketplace"</b></p>
            </header>

            <Listing on_listing_completed=on_listing_completed />

            <ItemList reload=reload on_load_completed=on_load_completed />
        </div>
    }
}
