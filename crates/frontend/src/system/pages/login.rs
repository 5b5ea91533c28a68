use crate::layout::global_context::AppGlobalContext;
use crate::routes::{use_app_navigate, AppRoute};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Sign-in screen. There is no authentication: both buttons go straight to
/// their dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = AppGlobalContext::expect();
    let (brand, tagline) = ctx
        .config
        .with_value(|c| (c.app.brand.clone(), c.app.tagline.clone()));

    let (credential, set_credential) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let navigate = use_app_navigate();
    let go_user = {
        let navigate = navigate.clone();
        move |_| {
            log::info!("user login");
            navigate(AppRoute::User);
        }
    };
    let go_admin = move |_| {
        log::info!("admin login");
        navigate(AppRoute::Admin);
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <div class="login-box__logo">
                    <h1>{brand}</h1>
                    <p class="login-box__tagline">{tagline}</p>
                </div>

                <label class="form__label form__label--caps" for="credential">"EMAIL OR MOBILE"</label>
                <input
                    id="credential"
                    class="form__input"
                    type="text"
                    placeholder="Enter your credentials"
                    prop:value=move || credential.get()
                    on:input=move |ev| set_credential.set(event_target_value(&ev))
                />

                <label class="form__label form__label--caps" for="password">"PASSWORD"</label>
                <input
                    id="password"
                    class="form__input"
                    type="password"
                    placeholder="••••••••"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />

                <div class="login-box__actions">
                    <button class="login-box__button login-box__button--dark" on:click=go_user>
                        {icon("user")}
                        "User Login"
                    </button>
                    <button class="login-box__button" on:click=go_admin>
                        {icon("shield")}
                        "Admin Panel"
                    </button>
                </div>

                <p class="login-box__footer">
                    "New here? "
                    <a class="link" href=AppRoute::Register.path()>"Create an account"</a>
                </p>
                <p class="login-box__footer">
                    "By logging in, you agree to our "
                    <span class="link">"Terms of Service"</span>
                </p>
            </div>
        </div>
    }
}
