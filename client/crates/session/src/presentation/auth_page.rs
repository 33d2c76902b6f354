//! Auth Page
//!
//! Glue between the auth form, the credential use case and the router.

use std::sync::Arc;

use crate::application::auth_form::AuthForm;
use crate::application::submit_credentials::SubmitCredentialsUseCase;
use crate::domain::entity::navigation::RouteLocation;
use crate::domain::notifier::Notifier;
use crate::domain::provider::AuthProvider;
use crate::error::AuthResult;
use crate::presentation::dto::CredentialsForm;
use crate::presentation::router::Router;

pub struct AuthPage<P, N>
where
    P: AuthProvider,
    N: Notifier,
{
    pub form: AuthForm,
    submit: SubmitCredentialsUseCase<P, N>,
    router: Arc<Router<P>>,
}

impl<P, N> AuthPage<P, N>
where
    P: AuthProvider,
    N: Notifier,
{
    pub fn new(submit: SubmitCredentialsUseCase<P, N>, router: Arc<Router<P>>) -> Self {
        Self {
            form: AuthForm::new(),
            submit,
            router,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.submit.loading().is_loading()
    }

    /// Fill the form from a submitted payload
    pub fn fill(&mut self, payload: CredentialsForm) {
        self.form.model = payload.into();
    }

    pub fn toggle_auth(&mut self) {
        self.form.toggle_mode();
    }

    pub fn reset_form(&mut self) {
        self.form.reset();
    }

    /// Submit in the current mode and navigate home on success
    pub async fn on_submit(&self) -> AuthResult<RouteLocation> {
        let established = self
            .submit
            .execute(self.form.mode(), &self.form.model)
            .await?;
        self.router.navigate(&established.redirect_to).await
    }
}
