//! Clients for UC Davis web applications that sit behind CAS.
//!
//! Clients built with a shared application alias its session, so logging in
//! through one of them authenticates all of them.
pub mod cas;
pub mod client;
pub(crate) mod config;
pub mod credentials;
pub mod error;
pub mod models;
pub mod protected;

pub use cas::CasService;
pub use client::{Application, HttpClient, Session};
pub use credentials::Credentials;
pub use error::{Error, Kind, Result};
pub use models::{Course, Season, Term};
pub use protected::{ProtectedClient, ProtectedClientBuilder};
