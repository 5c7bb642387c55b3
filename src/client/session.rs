extern crate reqwest;
extern crate tokio;

use crate::{
    config::client::{USER_AGENT, VERBOSE},
    error::{Error, Kind, Result},
};
use reqwest::{
    cookie::{CookieStore, Jar},
    Client, ClientBuilder, Url,
};
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use tokio::sync::{Mutex, MutexGuard};

struct Inner {
    client: Client,
    jar: Option<Arc<Jar>>,
    login: Mutex<()>,
    generation: AtomicU64,
}

/// Handle to one browser-like HTTP session.
///
/// Cloning a `Session` aliases it: every clone issues requests through the
/// same client and reads and writes the same cookie jar.
#[derive(Clone)]
pub struct Session(Arc<Inner>);

impl Session {
    fn from_builder(builder: ClientBuilder, jar: Option<Arc<Jar>>) -> Result<Self> {
        let builder = match &jar {
            Some(jar) => builder.cookie_provider(Arc::clone(jar)),
            None => builder,
        };
        let client = builder
            .user_agent(USER_AGENT)
            .connection_verbose(VERBOSE)
            .build()
            .map_err(|e| Error::with_kind(Kind::Builder(e)))?;
        Ok(Session(Arc::new(Inner {
            client,
            jar,
            login: Mutex::new(()),
            generation: AtomicU64::new(0),
        })))
    }
    pub fn new() -> Result<Self> {
        Self::from_builder(Client::builder(), Some(Arc::new(Jar::default())))
    }
    /// A session that never stores cookies. It cannot be shared.
    pub fn cookieless() -> Result<Self> {
        Self::from_builder(Client::builder(), None)
    }

    pub(crate) fn client(&self) -> &Client {
        &self.0.client
    }
    pub fn has_cookie_store(&self) -> bool {
        self.0.jar.is_some()
    }
    /// `Cookie` header value this session would send to `url`.
    pub fn cookies(&self, url: &Url) -> Option<String> {
        self.0
            .jar
            .as_ref()?
            .cookies(url)
            .and_then(|v| v.to_str().ok().map(str::to_owned))
    }
    pub fn add_cookie_str(&self, cookie: &str, url: &Url) {
        if let Some(jar) = &self.0.jar {
            jar.add_cookie_str(cookie, url);
        }
    }
    /// Whether both handles alias the same session.
    pub fn ptr_eq(&self, other: &Session) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn generation(&self) -> u64 {
        self.0.generation.load(Ordering::Acquire)
    }
    pub(crate) fn bump_generation(&self) {
        self.0.generation.fetch_add(1, Ordering::AcqRel);
    }
    pub(crate) async fn lock_login(&self) -> MutexGuard<'_, ()> {
        self.0.login.lock().await
    }
}
