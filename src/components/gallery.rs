use crate::components::Icon;
use dioxus::prelude::*;

/// Image picker panel with an "upload media" affordance underneath.
///
/// When `returning` is set the panel was opened from another step, so it
/// shows a back caret before the title instead of a close cross.
#[component]
pub fn Gallery(
    on_close: EventHandler<MouseEvent>,
    returning: bool,
    images: Vec<String>,
    on_image_selected: Option<EventHandler<usize>>,
    on_add_media: Option<EventHandler<MouseEvent>>,
) -> Element {
    rsx! {
        div { class: "h-full flex flex-col items-center justify-center gap-y-6 max-w-5xl px-6 py-8 bg-neutrals-light-200 rounded-xl",
            div { class: "w-full flex justify-between items-center",
                div { class: "flex gap-x-2 items-center text-2xl font-bold",
                    if returning {
                        button {
                            class: "cursor-pointer hover:text-primary-main transition ease-in-out",
                            r#type: "button",
                            aria_label: "Back to previous step",
                            onclick: move |evt| on_close.call(evt),
                            Icon {
                                name: "caret-left".to_string(),
                                class: "w-6 h-6".to_string(),
                            }
                        }
                    }
                    h1 { "Gallery" }
                }
                if !returning {
                    button {
                        class: "cursor-pointer hover:text-primary-main transition ease-in-out",
                        r#type: "button",
                        aria_label: "Close gallery",
                        onclick: move |evt| on_close.call(evt),
                        Icon { name: "x".to_string(), class: "w-6 h-6".to_string() }
                    }
                }
            }

            div { class: "grid h-96 w-full grid-cols-2 md:grid-cols-4 gap-6 items-center overflow-y-auto scroller",
                for (index, src) in images.into_iter().enumerate() {
                    img {
                        key: "{index}",
                        src: "{src}",
                        alt: "gallery",
                        class: "w-56 aspect-square rounded-xl cursor-pointer hover:scale-95 transition ease-in-out duration-200",
                        onclick: move |_| {
                            if let Some(handler) = on_image_selected {
                                handler.call(index);
                            }
                        },
                    }
                }
            }

            div { class: "flex w-full items-center gap-x-4",
                div { class: "bg-primary-main w-full h-1.5 rounded-lg" }
                p { "or" }
                div { class: "bg-primary-main w-full h-1.5 rounded-lg" }
            }

            h2 { class: "w-full text-xl", "Upload Media" }
            MediaUploadZone {
                onclick: move |evt| {
                    if let Some(handler) = on_add_media {
                        handler.call(evt);
                    }
                },
            }
        }
    }
}

#[component]
fn MediaUploadZone(onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            class: "w-full h-32 flex flex-col items-center justify-center gap-2 rounded-xl border-2 border-dashed border-primary-main text-primary-main hover:bg-primary-main/10 transition-colors",
            r#type: "button",
            onclick: move |evt| onclick.call(evt),
            Icon { name: "upload".to_string(), class: "w-8 h-8".to_string() }
            span { "Add media" }
        }
    }
}
