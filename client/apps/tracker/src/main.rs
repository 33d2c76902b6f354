//! Interview Tracker Client Entry Point
//!
//! Wires the session core together and walks a scripted session:
//! blocked navigation, sign-up, protected pages, sign-out.
//! Uses `anyhow` for startup errors, but session-level
//! errors should use `session::AuthError`.

mod settings;

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use session::application::{
    AuthGateUseCase, LoadingFlag, LoggedInState, SignOutUseCase, SubmitCredentialsUseCase,
};
use session::domain::AuthState;
use session::infra::notifier::TracingNotifier;
use session::presentation::auth_page::AuthPage;
use session::presentation::dto::{CredentialsForm, SessionStatusResponse};
use session::presentation::nav_menu::{MenuAction, default_menu, visible_items};
use session::{InMemoryAuthProvider, Router, SessionConfig, SessionStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::settings::{DemoAccount, ProviderSettings};

/// Delay before the local provider reports its initial state
const LOCAL_PROVIDER_STARTUP: Duration = Duration::from_millis(200);

#[derive(Serialize)]
struct Step {
    action: String,
    status: SessionStatusResponse,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tracker=info,session=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(SessionConfig::from_env()?);

    let provider_settings = ProviderSettings::from_env();
    if !provider_settings.is_local() {
        tracing::warn!(
            project_id = provider_settings.project_id.as_deref().unwrap_or_default(),
            auth_domain = provider_settings.auth_domain.as_deref().unwrap_or_default(),
            "Remote provider configured but not bundled, using in-memory provider"
        );
    }

    // The managed provider starts unresolved and reports shortly after.
    let provider = InMemoryAuthProvider::new(AuthState::Pending);
    let resolver = provider.clone();
    tokio::spawn(async move {
        tokio::time::sleep(LOCAL_PROVIDER_STARTUP).await;
        resolver.publish(AuthState::SignedOut);
    });
    let provider = Arc::new(provider);

    tracing::info!(
        resolution_timeout_ms = config.resolution_timeout_ms(),
        password_min_len = config.password_min_len,
        password_max_len = config.password_max_len,
        "Session core initialized"
    );

    let store = SessionStore::new();
    let notifier = Arc::new(TracingNotifier);

    let gate = AuthGateUseCase::new(provider.clone(), store.clone(), config.clone());
    let router = Arc::new(Router::new(gate));
    let submit = SubmitCredentialsUseCase::new(
        provider.clone(),
        notifier,
        store.clone(),
        LoadingFlag::new(),
        config.clone(),
    );
    let sign_out = SignOutUseCase::new(provider.clone(), store.clone());
    let mut auth_page = AuthPage::new(submit, router.clone());
    let mut view = LoggedInState::new(store.clone());
    view.on_before_mount();

    let mut steps = Vec::new();
    let mut record = |action: &str| {
        steps.push(Step {
            action: action.to_string(),
            status: SessionStatusResponse::capture(&store, &router.current()),
        });
    };

    // 1. Protected page before signing in
    router.navigate("/list").await?;
    record("open /list while signed out");

    // 2. Sign up on the public auth page
    router.navigate(&config.auth_route).await?;
    let account = DemoAccount::from_env();
    auth_page.toggle_auth();
    auth_page.fill(CredentialsForm {
        email: account.email,
        password: account.password,
    });
    match auth_page.on_submit().await {
        Ok(location) => tracing::info!(path = %location.path, "Signed up"),
        Err(e) if e.kind().is_user_facing() => {
            tracing::warn!(error = %e.to_app_error().user_message(), "Sign-up failed")
        }
        Err(e) => tracing::debug!(error = %e, "Sign-up discarded"),
    }
    record("sign up");

    // 3. Protected pages once signed in
    router.navigate("/statistic").await?;
    record("open /statistic");
    router.navigate("/interview/1").await?;
    record("open /interview/1");

    // 4. Sign out through the menu
    view.on_updated();
    let menu = default_menu();
    let sign_out_item = visible_items(&menu, &view)
        .into_iter()
        .find(|item| item.action == Some(MenuAction::SignOut));
    if let Some(item) = sign_out_item {
        sign_out.execute().await;
        router.navigate(item.path).await?;
    }
    record("sign out");

    // 5. Protected page again
    router.navigate("/list").await?;
    record("open /list after sign out");

    println!("{}", serde_json::to_string_pretty(&steps)?);

    Ok(())
}
