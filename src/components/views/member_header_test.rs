use crate::components::{Icon, MemberHeader, ProfileColor};
use dioxus::prelude::*;

#[component]
pub fn MemberHeaderTest() -> Element {
    rsx! {
        div { class: "space-y-6",
            h1 { class: "text-3xl font-bold", "Member header" }
            div { class: "flex flex-col gap-y-10",
                for color in ProfileColor::ALL {
                    MemberHeader {
                        background_color: color,
                        username: format!("{} member", color.label()),
                        Icon { name: "user", class: "w-16 h-16 text-white" }
                    }
                }
            }
        }
    }
}
