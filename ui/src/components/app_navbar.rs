use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Navbar stylesheet; inlined in release native builds like the main theme.
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements, so `ui` does not need to know each platform's `Route` enum.
/// Each closure receives the label to render inside the link.
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub dashboard: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar() -> Element {
    let internal_nav: Option<Element> = NAV_BUILDER.get().map(|builder| {
        let home = (builder.home)("Home");
        let dashboard = (builder.dashboard)("Dashboard");

        rsx! {
            nav { class: "navbar__links",
                {home}
                {dashboard}
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-mark", "Gamescope" }
                    span { class: "navbar__brand-subtitle", "Games statistics" }
                }

                if let Some(nav) = internal_nav {
                    {nav}
                }
            }
        }
    }
}
