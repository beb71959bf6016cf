use maud::{html, Markup};

use super::components::layout;

/// Show the account dashboard (placeholder for now)
pub async fn show() -> Markup {
    layout::base(
        "Dashboard",
        html! {
            (layout::navbar("/dashboard"))
            (layout::container(html! {
                h1 class="text-3xl font-bold text-gray-900 mb-8" {
                    "Dashboard"
                }

                div class="grid grid-cols-1 gap-5 sm:grid-cols-2 lg:grid-cols-3" {
                    (layout::card("Account", html! {
                        p class="text-gray-600" { "Your account overview will appear here." }
                    }))
                    (layout::card("Activity", html! {
                        p class="text-gray-600" { "Recent activity will appear here." }
                    }))
                    (layout::card("Settings", html! {
                        p class="text-gray-600" { "Account settings will appear here." }
                    }))
                }
            }))
        },
    )
}
