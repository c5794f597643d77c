use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { "Gamescope" }
            p { "An interactive look at two decades of video-game releases and review scores." }

            ul { class: "page-home__features",
                li { "Filter by genre, content rating and release-year window." }
                li { "Stacked release counts per platform over time." }
                li { "User scores plotted against critic scores, colored by genre." }
            }
            p { class: "page-home__cta",
                "Head to the Dashboard tab to start exploring."
            }
        }
    }
}
