//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::refresh::RefreshCoordinator;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, token_check::TokenCheckPage};
use crate::state::{session::SessionState, ui::UiState, users::UsersState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, user-directory, and UI contexts and sets up
/// client-side routing. The session is the only ambient authority: every
/// consumer receives it through context rather than a global.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::booting());
    let users = RwSignal::new(UsersState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(session);
    provide_context(users);
    provide_context(ui);
    provide_context(RefreshCoordinator::new());

    // Restore the persisted session and theme in the browser. On the
    // server the session stays in its loading state so guards render
    // placeholders instead of redirecting mid-SSR.
    #[cfg(feature = "hydrate")]
    {
        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);

        match crate::state::session::restore() {
            Some((access, refresh)) => session.update(|s| s.establish(access, refresh)),
            None => session.update(|s| s.loading = false),
        }
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/admin-console.css"/>
        <Title text="Admin Console"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("token-check") view=TokenCheckPage/>
            </Routes>
        </Router>
    }
}
