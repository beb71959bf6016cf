use maud::{html, Markup};

use super::components::layout;

/// Show the bookings calendar (placeholder for now)
pub async fn show() -> Markup {
    layout::base(
        "Events",
        html! {
            (layout::navbar("/events"))
            (layout::container(html! {
                h1 class="text-3xl font-bold text-gray-900 mb-8" {
                    "Upcoming events"
                }

                div class="grid grid-cols-1 gap-5 sm:grid-cols-2" {
                    (layout::card("Calendar", html! {
                        p class="text-gray-600" { "Your booking calendar will appear here." }
                    }))
                    (layout::card("Bookings", html! {
                        p class="text-gray-600" { "Confirmed bookings will appear here." }
                    }))
                }
            }))
        },
    )
}
