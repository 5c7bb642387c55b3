extern crate log;
extern crate reqwest;

use crate::{
    cas::CasService,
    client::{Application, HttpClient, Session},
    config::cas::BASE,
    credentials::Credentials,
    error::{url_error, Error, Kind, Result},
};
use log::{debug, warn};
use reqwest::{Method, RequestBuilder, Response, Url};

/// A client for an application behind CAS.
///
/// Every request is checked for a redirect to the login service. When one
/// happens the client logs in and issues the request exactly once more.
pub struct ProtectedClient {
    client: HttpClient,
    auth: Option<CasService>,
    cas_base: Url,
}

pub struct ProtectedClientBuilder<'a> {
    base: String,
    credentials: Option<Credentials>,
    shared_app: Option<&'a dyn Application>,
    cas_base: Option<String>,
}

impl<'a> ProtectedClientBuilder<'a> {
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }
    /// Adopt `shared_app`'s session. If it can re-authenticate, its
    /// credentials are inherited unless [`credentials`](Self::credentials) is also set.
    pub fn shared(mut self, shared_app: &'a dyn Application) -> Self {
        self.shared_app = Some(shared_app);
        self
    }
    pub fn cas_base<T: Into<String>>(mut self, base: T) -> Self {
        self.cas_base = Some(base.into());
        self
    }

    pub fn build(self) -> Result<ProtectedClient> {
        let client = match self.shared_app {
            Some(app) => HttpClient::shared(&self.base, app)?,
            None => HttpClient::new(&self.base)?,
        };
        let inherited = self.shared_app.and_then(|app| app.auth_service());
        let cas_base = self
            .cas_base
            .as_deref()
            .or_else(|| inherited.map(CasService::base))
            .unwrap_or(BASE)
            .to_owned();

        let mut auth = match inherited {
            Some(service) => Some(CasService::with_base(
                &cas_base,
                service.credentials().clone(),
                &client,
            )?),
            None => None,
        };
        if let Some(credentials) = self.credentials {
            auth = Some(CasService::with_base(&cas_base, credentials, &client)?);
        }
        Ok(ProtectedClient {
            cas_base: Url::parse(&cas_base).map_err(url_error)?,
            client,
            auth,
        })
    }
}

impl ProtectedClient {
    pub fn builder<'a, T: Into<String>>(base: T) -> ProtectedClientBuilder<'a> {
        ProtectedClientBuilder {
            base: base.into(),
            credentials: None,
            shared_app: None,
            cas_base: None,
        }
    }
    pub fn new(base: &str, credentials: Credentials) -> Result<Self> {
        Self::builder(base).credentials(credentials).build()
    }

    pub fn base(&self) -> &str {
        self.client.base()
    }
    /// Whether `url` belongs to the authentication provider.
    pub fn is_auth_redirect(&self, url: &Url) -> bool {
        url.origin() == self.cas_base.origin()
    }

    async fn reauthenticate(&self, seen: u64) -> Result<()> {
        let auth = self.auth.as_ref().ok_or_else(|| {
            Error::with_description(
                Kind::Config,
                format!("{} requires login but no credentials were given", self.base()),
            )
        })?;
        let session = self.client.session();
        let _guard = session.lock_login().await;
        if session.generation() != seen {
            debug!("session was re-authenticated while waiting, skipping login");
            return Ok(());
        }
        auth.auth().await?;
        session.bump_generation();
        Ok(())
    }
    /// Runs a login transaction now instead of waiting for a redirect.
    pub async fn auth(&self) -> Result<()> {
        self.reauthenticate(self.client.session().generation()).await
    }

    pub async fn request<F>(&self, method: Method, endpoint: &str, options: F) -> Result<Response>
    where
        F: Fn(RequestBuilder) -> RequestBuilder,
    {
        let seen = self.client.session().generation();
        let response = self
            .client
            .request(method.clone(), endpoint, &options)
            .await?;
        if !self.is_auth_redirect(response.url()) {
            return Ok(response);
        }

        warn!(
            "{}{} redirected to {}, re-authenticating",
            self.base(),
            endpoint,
            response.url()
        );
        self.reauthenticate(seen).await?;
        let response = self.client.request(method, endpoint, &options).await?;
        if self.is_auth_redirect(response.url()) {
            warn!("{}{} still redirected after login", self.base(), endpoint);
        }
        Ok(response)
    }
    pub async fn get(&self, endpoint: &str) -> Result<Response> {
        self.request(Method::GET, endpoint, |r| r).await
    }
    pub async fn get_with<F>(&self, endpoint: &str, options: F) -> Result<Response>
    where
        F: Fn(RequestBuilder) -> RequestBuilder,
    {
        self.request(Method::GET, endpoint, options).await
    }
    pub async fn post(&self, endpoint: &str) -> Result<Response> {
        self.request(Method::POST, endpoint, |r| r).await
    }
    pub async fn post_with<F>(&self, endpoint: &str, options: F) -> Result<Response>
    where
        F: Fn(RequestBuilder) -> RequestBuilder,
    {
        self.request(Method::POST, endpoint, options).await
    }
}

impl Application for ProtectedClient {
    fn session(&self) -> &Session {
        self.client.session()
    }
    fn auth_service(&self) -> Option<&CasService> {
        self.auth.as_ref()
    }
}
