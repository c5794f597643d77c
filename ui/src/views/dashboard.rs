use dioxus::prelude::*;

use crate::core::filter::{filter_and_summarize, FilterSelection};
use crate::dashboard::{
    DashboardState, FilterChips, ReleaseAreaChart, ScoreScatterChart, YearRangeSlider,
};

/// The dashboard page: three filter controls, a summary line and the two
/// charts. Every control change re-runs the pure filter over the shared
/// read-only table; nothing is retained between interactions.
#[component]
pub fn Dashboard() -> Element {
    let state = use_hook(DashboardState::load);

    let initial_genres = state.initial_genres();
    let initial_ratings = state.initial_ratings();
    let initial_years = state.initial_year_range();

    let selected_genres = use_signal(move || initial_genres);
    let selected_ratings = use_signal(move || initial_ratings);
    let year_range = use_signal(move || initial_years);

    let Some(table) = state.table else {
        let message = state
            .error
            .unwrap_or_else(|| "The games dataset is unavailable.".to_string());
        return rsx! {
            section { class: "page page-dashboard",
                div { class: "dashboard__error",
                    h1 { "Games statistics" }
                    p { "{message}" }
                }
            }
        };
    };

    let (year_lo, year_hi) = year_range();
    let selection = FilterSelection {
        genres: selected_genres(),
        ratings: selected_ratings(),
        year_lo,
        year_hi,
    };
    let outcome = filter_and_summarize(table, &selection);
    log::debug!("{}", outcome.summary);

    rsx! {
        section { class: "page page-dashboard",
            header { class: "dashboard__intro",
                h1 { "Games statistics" }
                p {
                    "You can adjust genre, rating and time interval filters to see the number of games released"
                }
            }

            div { class: "dashboard__controls",
                FilterChips {
                    label: "Genres",
                    options: table.genres().to_vec(),
                    selected: selected_genres,
                }
                FilterChips {
                    label: "Ratings",
                    options: table.ratings().to_vec(),
                    selected: selected_ratings,
                }
            }

            p { class: "dashboard__summary", "{outcome.summary}" }

            div { class: "dashboard__charts",
                ReleaseAreaChart { points: outcome.area }
                ScoreScatterChart { points: outcome.scatter }
            }

            YearRangeSlider { bounds: table.year_bounds(), range: year_range }
        }
    }
}
