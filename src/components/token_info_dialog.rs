//! Modal displaying the session's access and refresh tokens.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Which token a copy action targets.
#[derive(Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Access,
    Refresh,
}

/// Token info modal with copyable access and refresh tokens.
#[component]
pub fn TokenInfoDialog(on_close: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let copied = RwSignal::new(None::<TokenKind>);

    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });

    let copy_token = move |kind: TokenKind| {
        #[cfg(feature = "hydrate")]
        {
            let state = session.get_untracked();
            let token = match kind {
                TokenKind::Access => state.access_token,
                TokenKind::Refresh => state.refresh_token,
            };
            if let Some(t) = token {
                if let Some(window) = web_sys::window() {
                    let clipboard = window.navigator().clipboard();
                    let _ = clipboard.write_text(&t);
                    copied.set(Some(kind));
                    leptos::task::spawn_local(async move {
                        gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
                        // Skip the reset if the dialog closed meanwhile.
                        if copied.try_get_untracked() == Some(Some(kind)) {
                            let _ = copied.try_set(None);
                        }
                    });
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = kind;
        }
    };

    let access_token = move || {
        session
            .get()
            .access_token
            .unwrap_or_else(|| "—".to_owned())
    };
    let refresh_token = move || {
        session
            .get()
            .refresh_token
            .unwrap_or_else(|| "—".to_owned())
    };

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog dialog--tokens"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <h2>"Token Info"</h2>

                <div class="dialog__token-row">
                    <span class="dialog__token-label">"Access Token"</span>
                </div>
                <div class="dialog__token-box">
                    <code class="dialog__token-text">{access_token}</code>
                    <button
                        class="btn dialog__token-copy"
                        on:click=move |_| copy_token(TokenKind::Access)
                        title="Copy access token"
                    >
                        {move || if copied.get() == Some(TokenKind::Access) { "Copied" } else { "Copy" }}
                    </button>
                </div>

                <div class="dialog__token-row">
                    <span class="dialog__token-label">"Refresh Token"</span>
                </div>
                <div class="dialog__token-box">
                    <code class="dialog__token-text">{refresh_token}</code>
                    <button
                        class="btn dialog__token-copy"
                        on:click=move |_| copy_token(TokenKind::Refresh)
                        title="Copy refresh token"
                    >
                        {move || if copied.get() == Some(TokenKind::Refresh) { "Copied" } else { "Copy" }}
                    </button>
                </div>

                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=on_close_click>"Close"</button>
                </div>
            </div>
        </div>
    }
}
