use dioxus::prelude::*;

/// Avatar backdrop colours available to members.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileColor {
    Tulip,
    Gold,
    Lime,
    Jade,
    Water,
    Air,
    Lilac,
    Candy,
}

impl ProfileColor {
    pub const ALL: [ProfileColor; 8] = [
        ProfileColor::Tulip,
        ProfileColor::Gold,
        ProfileColor::Lime,
        ProfileColor::Jade,
        ProfileColor::Water,
        ProfileColor::Air,
        ProfileColor::Lilac,
        ProfileColor::Candy,
    ];

    pub fn background_class(self) -> &'static str {
        match self {
            ProfileColor::Tulip => "bg-[#ff8a8a]",
            ProfileColor::Gold => "bg-[#ffd166]",
            ProfileColor::Lime => "bg-[#c5f277]",
            ProfileColor::Jade => "bg-[#5fd3a6]",
            ProfileColor::Water => "bg-[#6ec3f4]",
            ProfileColor::Air => "bg-[#c9e4ff]",
            ProfileColor::Lilac => "bg-[#c7a6ff]",
            ProfileColor::Candy => "bg-[#ff9ed8]",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProfileColor::Tulip => "tulip",
            ProfileColor::Gold => "gold",
            ProfileColor::Lime => "lime",
            ProfileColor::Jade => "jade",
            ProfileColor::Water => "water",
            ProfileColor::Air => "air",
            ProfileColor::Lilac => "lilac",
            ProfileColor::Candy => "candy",
        }
    }
}

#[component]
pub fn ProfilePicture(background: ProfileColor, children: Element) -> Element {
    let bg = background.background_class();
    rsx! {
        div { class: "w-full h-full rounded-full overflow-hidden flex items-center justify-center {bg}",
            {children}
        }
    }
}

#[component]
pub fn MemberHeader(background_color: ProfileColor, username: String, children: Element) -> Element {
    rsx! {
        div { class: "flex flex-col md:flex-row items-center w-full h-36",
            div { class: "w-32 h-32",
                ProfilePicture { background: background_color, {children} }
            }
            div { class: "pl-4 font-bold justify-start flex pb-2 w-40 text-2xl",
                h1 { "{username}" }
            }
        }
    }
}
