//! Listing Form Component
//!
//! Form for putting a new item on the marketplace, with an optional
//! photo upload.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;

/// Form for listing a new item
#[component]
pub fn Listing(on_listing_completed: Callback<()>) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let image_input: NodeRef<leptos::html::Input> = NodeRef::new();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let item_name = name.get();
        let item_category = category.get();
        if item_name.is_empty() || item_category.is_empty() {
            return;
        }
        let image = image_input
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        spawn_local(async move {
            match api::post_item(&item_name, &item_category, image.as_ref()).await {
                Ok(()) => {
                    web_sys::console::log_1(&"[Listing] POST success".into());
                    set_name.set(String::new());
                    set_category.set(String::new());
                    if let Some(input) = image_input.get_untracked() {
                        input.set_value("");
                    }
                    on_listing_completed.run(());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Listing] POST error: {}", e).into());
                }
            }
        });
    };

    view! {
        <div class="Listing">
            <form on:submit=on_submit>
                <input
                    type="text"
                    placeholder="name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="category"
                    prop:value=move || category.get()
                    on:input=move |ev| set_category.set(event_target_value(&ev))
                />
                <input type="file" accept="image/*" node_ref=image_input />
                <button type="submit">"List this item"</button>
            </form>
        </div>
    }
}
