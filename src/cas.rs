extern crate log;
extern crate reqwest;

mod form;

use crate::{
    client::{Application, HttpClient, Session},
    config::cas::{BASE, LOGIN_ENDPOINT},
    credentials::Credentials,
    error::{network_error, Error, Kind, Result},
};
use form::LoginForm;
pub use form::is_authenticated;
use log::{debug, info};
use reqwest::Method;

/// Performs login transactions against the Central Authentication Service.
///
/// The service shares its session with the application it was created for,
/// so the ticket-granting cookie obtained by [`CasService::auth`] is visible
/// to every client holding that session.
#[derive(Clone)]
pub struct CasService {
    client: HttpClient,
    credentials: Credentials,
}

impl CasService {
    pub fn new(credentials: Credentials, shared_app: &dyn Application) -> Result<Self> {
        Self::with_base(BASE, credentials, shared_app)
    }
    pub fn with_base(
        base: &str,
        credentials: Credentials,
        shared_app: &dyn Application,
    ) -> Result<Self> {
        Ok(CasService {
            client: HttpClient::shared(base, shared_app)?,
            credentials,
        })
    }
    /// Same credentials and provider, bound to `shared_app`'s session.
    pub fn rebind(&self, shared_app: &dyn Application) -> Result<Self> {
        Self::with_base(self.base(), self.credentials.clone(), shared_app)
    }

    pub fn base(&self) -> &str {
        self.client.base()
    }
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub async fn auth(&self) -> Result<()> {
        let page = self.client.get(LOGIN_ENDPOINT).await?;
        let page_url = page.url().clone();
        let body = page.text().await.map_err(network_error)?;
        if is_authenticated(&body) {
            debug!("already logged into {}", self.base());
            return Ok(());
        }

        info!("logging into {} as {}", self.base(), self.credentials.username());
        let form = LoginForm::parse(&body, &page_url)?;
        let action = form.action.clone();
        let data = form.into_submission(&self.credentials);
        let body = self
            .client
            .send(Method::POST, action, |r| r.form(&data))
            .await?
            .text()
            .await
            .map_err(network_error)?;
        if is_authenticated(&body) {
            info!("logged into {} as {}", self.base(), self.credentials.username());
            Ok(())
        } else {
            Err(Error::with_description(
                Kind::InvalidLogin,
                format!(
                    "{} rejected credentials for {}",
                    self.base(),
                    self.credentials.username()
                ),
            ))
        }
    }
}

impl Application for CasService {
    fn session(&self) -> &Session {
        self.client.session()
    }
    fn auth_service(&self) -> Option<&CasService> {
        Some(self)
    }
}
