extern crate log;
extern crate reqwest;

pub mod session;

use crate::{
    cas::CasService,
    error::{network_error, url_error, Error, Kind, Result},
};
use log::debug;
use reqwest::{Method, RequestBuilder, Response, Url};
pub use session::Session;

/// Anything that owns a [`Session`] other clients may adopt.
pub trait Application {
    fn session(&self) -> &Session;
    /// The login service used for re-authentication, if this application has one.
    fn auth_service(&self) -> Option<&CasService> {
        None
    }
}

/// Issues requests against one base URL through a persistent session.
#[derive(Clone)]
pub struct HttpClient {
    base: String,
    session: Session,
}

fn check_base(base: &str) -> Result<String> {
    Url::parse(base).map_err(url_error)?;
    Ok(base.trim_end_matches('/').to_owned())
}

impl HttpClient {
    pub fn new(base: &str) -> Result<Self> {
        Ok(HttpClient {
            base: check_base(base)?,
            session: Session::new()?,
        })
    }
    pub fn cookieless(base: &str) -> Result<Self> {
        Ok(HttpClient {
            base: check_base(base)?,
            session: Session::cookieless()?,
        })
    }
    /// A client whose session aliases `shared_app`'s, so both see the same cookies.
    pub fn shared(base: &str, shared_app: &dyn Application) -> Result<Self> {
        let session = shared_app.session();
        if !session.has_cookie_store() {
            return Err(Error::with_description(
                Kind::Config,
                "shared application has no cookie store to share",
            ));
        }
        Ok(HttpClient {
            base: check_base(base)?,
            session: session.clone(),
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }
    pub fn url(&self, endpoint: &str) -> Result<Url> {
        Url::parse(&format!("{}{}", self.base, endpoint)).map_err(url_error)
    }

    pub async fn send<F>(&self, method: Method, url: Url, options: F) -> Result<Response>
    where
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        debug!("{} {}", method, url);
        options(self.session.client().request(method, url))
            .send()
            .await
            .map_err(network_error)
    }
    pub async fn request<F>(&self, method: Method, endpoint: &str, options: F) -> Result<Response>
    where
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        self.send(method, self.url(endpoint)?, options).await
    }
    pub async fn get(&self, endpoint: &str) -> Result<Response> {
        self.request(Method::GET, endpoint, |r| r).await
    }
    pub async fn get_with<F>(&self, endpoint: &str, options: F) -> Result<Response>
    where
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        self.request(Method::GET, endpoint, options).await
    }
    pub async fn post(&self, endpoint: &str) -> Result<Response> {
        self.request(Method::POST, endpoint, |r| r).await
    }
    pub async fn post_with<F>(&self, endpoint: &str, options: F) -> Result<Response>
    where
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        self.request(Method::POST, endpoint, options).await
    }
}

impl Application for HttpClient {
    fn session(&self) -> &Session {
        &self.session
    }
}
impl Application for Session {
    fn session(&self) -> &Session {
        self
    }
}
