use dioxus::prelude::*;

#[component]
pub fn LoadingPanel(message: String) -> Element {
    rsx! {
        div { class: "panel status-panel",
            div { class: "spinner" }
            p { class: "muted", "{message}" }
        }
    }
}

#[component]
pub fn ErrorPanel(message: String, on_retry: EventHandler<()>) -> Element {
    rsx! {
        div { class: "panel status-panel status-error",
            h2 { class: "status-title", "Something went wrong" }
            p { "{message}" }
            button {
                class: "btn btn-primary",
                onclick: move |_| on_retry.call(()),
                "Try again"
            }
        }
    }
}
