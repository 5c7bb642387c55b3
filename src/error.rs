extern crate reqwest;
extern crate thiserror;
extern crate url;

use std::{boxed::Box, convert::Into, error::Error as StdError, fmt, result::Result as StdResult};

#[derive(Debug)]
pub struct Error(Box<Inner>);

#[derive(Debug, thiserror::Error)]
pub enum Kind {
    #[error("error building client")]
    Builder(#[source] reqwest::Error),
    #[error("error sending request")]
    Network(#[source] reqwest::Error),
    #[error("invalid url")]
    Url(#[source] url::ParseError),
    #[error("configuration error")]
    Config,
    #[error("invalid login")]
    InvalidLogin,
    #[error("unexpected page structure")]
    Parse,
    #[error("invalid term")]
    Term,
}

#[derive(Debug)]
struct Inner {
    kind: Kind,
    description: Option<String>,
}

pub type Result<T> = StdResult<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.kind, f)?;
        if let Some(d) = &self.0.description {
            write!(f, ": {}", d)?;
        }
        if let Some(source) = self.0.kind.source() {
            write!(f, " ({})", source)?;
        }
        Ok(())
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.kind.source()
    }
}
impl Error {
    fn new(inner: Inner) -> Self {
        Self(Box::new(inner))
    }
    pub(crate) fn with_kind(kind: Kind) -> Self {
        Self::new(Inner {
            kind,
            description: None,
        })
    }
    pub(crate) fn with_description<T: Into<String>>(kind: Kind, description: T) -> Self {
        Self::new(Inner {
            kind,
            description: Some(description.into()),
        })
    }

    pub fn kind(&self) -> &Kind {
        &self.0.kind
    }
    pub fn detail(&self) -> Option<&str> {
        self.0.description.as_deref()
    }
    /// Credentials were rejected by the authentication provider.
    pub fn is_invalid_login(&self) -> bool {
        matches!(self.0.kind, Kind::InvalidLogin)
    }
    pub fn is_config(&self) -> bool {
        matches!(self.0.kind, Kind::Config)
    }
    pub fn is_network(&self) -> bool {
        matches!(self.0.kind, Kind::Network(_))
    }
}

pub(crate) fn network_error(err: reqwest::Error) -> Error {
    Error::with_kind(Kind::Network(err))
}
pub(crate) fn url_error(err: url::ParseError) -> Error {
    Error::with_kind(Kind::Url(err))
}
pub(crate) fn parse_error<T: Into<String>>(description: T) -> Error {
    Error::with_description(Kind::Parse, description)
}
