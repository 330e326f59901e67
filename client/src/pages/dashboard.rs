//! Post-login landing route.
//!
//! Placeholder target for the login redirect; the real dashboard lives
//! elsewhere in the application.

use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <Title text="Dashboard"/>
        <div class="dashboard-page">
            <h1>"Dashboard"</h1>
            <p>"You are signed in."</p>
        </div>
    }
}
