//! Item List Component
//!
//! Fetches the item collection from the backend and renders it as a
//! list of image + text cards.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::config;
use crate::models::Item;

/// Display URL for an item photo. Items listed without a photo get the
/// frontend's placeholder logo.
fn image_url(image_name: &str) -> String {
    if image_name.is_empty() {
        format!("{}/logo192.png", config::frontend_url())
    } else {
        format!("{}/images/{}", config::backend_url(), image_name)
    }
}

/// List of all items currently on the marketplace.
///
/// Fetches whenever `reload` reads true. `on_load_completed` fires only
/// on a successful fetch; a failed fetch is logged and leaves both the
/// list and the flag untouched.
#[component]
pub fn ItemList(
    reload: ReadSignal<bool>,
    on_load_completed: Callback<()>,
) -> impl IntoView {
    let (items, set_items) = signal(Vec::<Item>::new());

    Effect::new(move |_| {
        if reload.get() {
            spawn_local(async move {
                match api::fetch_items().await {
                    Ok(res) => {
                        web_sys::console::log_1(
                            &format!("[ItemList] GET success: {} items", res.items.len()).into(),
                        );
                        set_items.set(res.items);
                        on_load_completed.run(());
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("[ItemList] GET error: {}", e).into());
                    }
                }
            });
        }
    });

    view! {
        <div class="ItemList">
            <For
                each=move || items.get()
                key=|item| item.id
                children=move |item| {
                    let src = image_url(&item.image_name);
                    view! {
                        <div class="ItemListItem">
                            <img class="Image" src=src alt=item.name.clone() />
                            <p>
                                <span><strong>"Name: "</strong>{item.name.clone()}</span>
                                <br/>
                                <span><strong>"Category: "</strong>{item.category.clone()}</span>
                            </p>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemsResponse;

    #[test]
    fn missing_image_resolves_to_placeholder() {
        assert_eq!(image_url(""), "http://localhost:3000/logo192.png");
    }

    #[test]
    fn named_image_resolves_to_backend_path() {
        assert_eq!(image_url("abc.jpg"), "http://localhost:9000/images/abc.jpg");
    }

    #[test]
    fn fetched_order_is_display_order() {
        let body = r#"{"items":[
            {"id":1,"name":"Bike","category":"Sports","image_name":""},
            {"id":2,"name":"Mug","category":"Kitchen","image_name":"mug.png"}
        ]}"#;
        let res: ItemsResponse = serde_json::from_str(body).unwrap();

        assert_eq!(res.items.len(), 2);
        assert_eq!(res.items[0].name, "Bike");
        assert_eq!(res.items[1].name, "Mug");
        assert_eq!(
            image_url(&res.items[0].image_name),
            "http://localhost:3000/logo192.png"
        );
        assert_eq!(
            image_url(&res.items[1].image_name),
            "http://localhost:9000/images/mug.png"
        );
    }
}
