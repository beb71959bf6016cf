use axum::{
    extract::{Form, Query},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use maud::{html, Markup};
use serde::Deserialize;

use crate::config;
use crate::session::{clear_flag_cookie, create_flag_cookie};

use super::components::layout;

/// Validate redirect URL to prevent open redirect attacks
/// Only allows relative URLs starting with /
fn validate_redirect_path(path: &str, landing_path: &str) -> String {
    if path.starts_with('/') && !path.starts_with("//") {
        path.to_string()
    } else {
        landing_path.to_string()
    }
}

/// Redirect query parameter
#[derive(Debug, Deserialize)]
pub struct RedirectQuery {
    #[serde(rename = "redirectPath")]
    pub redirect_path: Option<String>,
}

/// Login form data
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    #[serde(rename = "redirectPath")]
    pub redirect_path: Option<String>,
}

/// Password reset form data
#[derive(Debug, Deserialize)]
pub struct ResetForm {
    pub email: String,
}

/// Show login page
pub async fn login_page(Query(redirect): Query<RedirectQuery>) -> Markup {
    layout::base(
        "Login",
        layout::centered(html! {
            div {
                h2 class="mt-6 text-center text-3xl font-extrabold text-gray-900" {
                    "Sign in to your account"
                }
                p class="mt-2 text-center text-sm text-gray-600" {
                    "Or "
                    a href="/reset-password" class="font-medium text-primary hover:text-blue-500" {
                        "reset your password"
                    }
                }
            }

            // Login form
            form class="mt-8 space-y-6" action="/login" method="POST" {
                @if let Some(redirect_path) = redirect.redirect_path {
                    input type="hidden" name="redirectPath" value=(redirect_path);
                }

                div class="rounded-md shadow-sm -space-y-px" {
                    div {
                        label for="email" class="sr-only" { "Email address" }
                        input
                            id="email"
                            name="email"
                            type="email"
                            autocomplete="email"
                            required
                            class="appearance-none rounded-none relative block w-full px-3 py-2 border border-gray-300 placeholder-gray-500 text-gray-900 rounded-t-md focus:outline-none focus:ring-primary focus:border-primary focus:z-10 sm:text-sm"
                            placeholder="Email address";
                    }
                    div {
                        label for="password" class="sr-only" { "Password" }
                        input
                            id="password"
                            name="password"
                            type="password"
                            autocomplete="current-password"
                            required
                            class="appearance-none rounded-none relative block w-full px-3 py-2 border border-gray-300 placeholder-gray-500 text-gray-900 rounded-b-md focus:outline-none focus:ring-primary focus:border-primary focus:z-10 sm:text-sm"
                            placeholder="Password";
                    }
                }

                div {
                    button
                        type="submit"
                        class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-white bg-primary hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-primary" {
                        "Sign in"
                    }
                }
            }
        }),
    )
}

/// Show password reset page
pub async fn reset_password_page() -> Markup {
    layout::base(
        "Reset Password",
        layout::centered(html! {
            div {
                h2 class="mt-6 text-center text-3xl font-extrabold text-gray-900" {
                    "Reset your password"
                }
                p class="mt-2 text-center text-sm text-gray-600" {
                    "Remembered it? "
                    a href="/login" class="font-medium text-primary hover:text-blue-500" {
                        "Sign in"
                    }
                }
            }

            form class="mt-8 space-y-6" action="/reset-password" method="POST" {
                div {
                    label for="email" class="sr-only" { "Email address" }
                    input
                        id="email"
                        name="email"
                        type="email"
                        autocomplete="email"
                        required
                        class="appearance-none relative block w-full px-3 py-2 border border-gray-300 placeholder-gray-500 text-gray-900 rounded-md focus:outline-none focus:ring-primary focus:border-primary sm:text-sm"
                        placeholder="Email address";
                }

                div {
                    button
                        type="submit"
                        class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-white bg-primary hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-primary" {
                        "Send reset link"
                    }
                }
            }
        }),
    )
}

/// Handle login form submission.
///
/// There is no credential backend: submitting the form marks the client as
/// authenticated by setting the session flag, which is trusted at face
/// value everywhere else.
pub async fn login_submit(jar: CookieJar, Form(form): Form<LoginForm>) -> Response {
    let landing_path = config::get_settings().landing_path.as_str();

    let redirect_path = match form.redirect_path.as_deref() {
        Some(path) => validate_redirect_path(path, landing_path),
        None => landing_path.to_string(),
    };

    tracing::info!("client {} logged in", form.email);

    let jar = jar.add(create_flag_cookie());
    (jar, Redirect::to(&redirect_path)).into_response()
}

/// Handle password reset submission - placeholder, no mail is sent
pub async fn reset_password_submit(Form(form): Form<ResetForm>) -> Markup {
    tracing::info!("password reset requested for {}", form.email);

    layout::base(
        "Reset Password",
        layout::centered(html! {
            div class="text-center" {
                h2 class="mt-6 text-3xl font-extrabold text-gray-900" {
                    "Check your inbox"
                }
                p class="mt-2 text-sm text-gray-600" {
                    "If an account exists for " (form.email) ", a reset link is on its way."
                }
                a href="/login" class="mt-4 inline-block font-medium text-primary hover:text-blue-500" {
                    "← Back to login"
                }
            }
        }),
    )
}

/// Handle logout - clear the session flag and redirect to login
pub async fn logout_submit(jar: CookieJar) -> Response {
    let jar = jar.add(clear_flag_cookie());
    (jar, Redirect::to("/login")).into_response()
}
