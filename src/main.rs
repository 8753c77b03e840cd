use dioxus::prelude::*;

mod components;
mod input;

use components::Route;

const CATALOG_CSS: Asset = asset!("/assets/styling/catalog.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "UI Catalog" }
        document::Meta { name: "theme-color", content: "#6d4aff" }

        document::Stylesheet { href: TAILWIND_CSS }
        document::Stylesheet { href: CATALOG_CSS }

        Router::<Route> {}
    }
}
