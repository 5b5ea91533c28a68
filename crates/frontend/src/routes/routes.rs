use crate::system::pages::admin_dashboard::AdminPage;
use crate::system::pages::client_dashboard::UserPage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::register::RegisterPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_navigate;
use leptos_router::{path, NavigateOptions};

/// Top-level views of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Register,
    User,
    Admin,
}

impl AppRoute {
    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Login => "/",
            AppRoute::Register => "/register",
            AppRoute::User => "/user",
            AppRoute::Admin => "/admin",
        }
    }
}

/// Navigator bound to the current router. Call from a component body,
/// then use the returned closure in event handlers.
pub fn use_app_navigate() -> impl Fn(AppRoute) + Clone {
    let navigate = use_navigate();
    move |route: AppRoute| {
        log::debug!("navigate -> {}", route.path());
        navigate(route.path(), NavigateOptions::default());
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h2>"Page not found"</h2>
            <a href=AppRoute::Login.path()>"Back to sign in"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=LoginPage />
                <Route path=path!("/register") view=RegisterPage />
                <Route path=path!("/user") view=UserPage />
                <Route path=path!("/admin") view=AdminPage />
            </Routes>
        </Router>
    }
}
