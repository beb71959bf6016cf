use maud::{html, Markup, DOCTYPE};

use crate::config;

/// Base HTML layout with Tailwind CSS
pub fn base(title: &str, content: Markup) -> Markup {
    let app_name = &config::get_settings().app_name;

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " - " (app_name) }

                // Tailwind CSS (using CDN for now, can switch to build later)
                script src="https://cdn.tailwindcss.com" {}

                // Custom configuration for Tailwind
                script {
                    r#"
                    tailwind.config = {
                        theme: {
                            extend: {
                                colors: {
                                    primary: '#3b82f6',
                                }
                            }
                        }
                    }
                    "#
                }
            }
            body class="bg-gray-50 min-h-screen" {
                (content)
            }
        }
    }
}

/// Centered flex wrapper used by the unauthenticated pages. Renders its
/// children inside the containing markup, nothing more.
pub fn centered(content: Markup) -> Markup {
    html! {
        div class="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4 sm:px-6 lg:px-8" {
            div class="max-w-md w-full space-y-8" {
                (content)
            }
        }
    }
}

/// Navigation bar for the landing pages
pub fn navbar(landing_path: &str) -> Markup {
    let app_name = &config::get_settings().app_name;

    html! {
        nav class="bg-white shadow-sm border-b border-gray-200" {
            div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8" {
                div class="flex justify-between h-16" {
                    div class="flex items-center" {
                        a href=(landing_path) class="text-2xl font-bold text-primary" {
                            (app_name)
                        }
                    }
                    div class="flex items-center" {
                        form action="/logout" method="post" class="ml-4" {
                            button
                                type="submit"
                                class="text-sm text-gray-500 hover:text-gray-700" {
                                "Logout"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Container for main content
pub fn container(content: Markup) -> Markup {
    html! {
        div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8" {
            (content)
        }
    }
}

/// Card component
pub fn card(title: &str, content: Markup) -> Markup {
    html! {
        div class="bg-white overflow-hidden shadow rounded-lg" {
            div class="px-4 py-5 sm:p-6" {
                h3 class="text-lg leading-6 font-medium text-gray-900 mb-4" {
                    (title)
                }
                (content)
            }
        }
    }
}
