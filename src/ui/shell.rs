use dioxus::prelude::*;

use crate::app::{persist_user_state, Route};
use crate::domain::{AppState, ViewMode};
use crate::infra::scout::configured_base_url;
use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME, APP_TAGLINE};

#[component]
pub fn Shell(children: Element) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let current_theme = state.with(|s| s.theme);
    let view_mode = state.with(|s| s.view_mode);
    let api_base = configured_base_url();

    rsx! {
        div { class: "{theme::root_class(current_theme)}",
            header { class: "app-header",
                div { class: "header-inner",
                    div { class: "brand",
                        Link { class: "brand-title", to: Route::Home {}, "{APP_NAME}" }
                        p { class: "tagline", "{APP_TAGLINE}" }
                    }
                    nav { class: "header-actions",
                        div { class: "segmented",
                            ModeButton {
                                active: view_mode == ViewMode::Cards,
                                label: ViewMode::Cards.label(),
                                onclick: move |_| state.with_mut(|s| s.view_mode = ViewMode::Cards),
                            }
                            ModeButton {
                                active: view_mode == ViewMode::Table,
                                label: ViewMode::Table.label(),
                                onclick: move |_| state.with_mut(|s| s.view_mode = ViewMode::Table),
                            }
                        }
                        button {
                            class: "btn btn-ghost",
                            title: "Switch colour theme",
                            onclick: move |_| {
                                state.with_mut(|s| s.theme = s.theme.toggled());
                                persist_user_state(&state);
                            },
                            "{theme::toggle_label(current_theme)}"
                        }
                    }
                }
            }
            main { class: "app-main",
                {children}
            }
            footer { class: "app-footer",
                span { "{APP_NAME} {version_label()}" }
                span { class: "muted", "API: {api_base}" }
            }
        }
    }
}

#[component]
fn ModeButton(active: bool, label: &'static str, onclick: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "{theme::mode_button(active)}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
