extern crate scraper;

use crate::{
    config::cas::{FORM_ID, PASSWORD_FIELD, SUCCESS_SELECTOR, USERNAME_FIELD},
    credentials::Credentials,
    error::{parse_error, url_error, Result},
};
use reqwest::Url;
use scraper::{Html, Selector};

/// The CAS login form: where to submit and which fields to carry along.
#[derive(Debug, PartialEq)]
pub(crate) struct LoginForm {
    pub(crate) action: Url,
    pub(crate) fields: Vec<(String, String)>,
}

fn selector(s: &str) -> Selector {
    Selector::parse(s).expect("static selector must parse")
}

/// Whether a CAS page carries the "logged in" message.
pub fn is_authenticated(body: &str) -> bool {
    Html::parse_document(body)
        .select(&selector(SUCCESS_SELECTOR))
        .next()
        .is_some()
}

impl LoginForm {
    /// Extracts the login form from `body`; `page` resolves a relative action.
    pub(crate) fn parse(body: &str, page: &Url) -> Result<Self> {
        let document = Html::parse_document(body);
        let form = document
            .select(&selector(&format!("form#{}", FORM_ID)))
            .next()
            .ok_or_else(|| parse_error(format!("login form #{} not found", FORM_ID)))?;
        let action = form
            .value()
            .attr("action")
            .ok_or_else(|| parse_error("login form has no action"))?;
        let fields = form
            .select(&selector("[name][value]"))
            .filter_map(|e| {
                let e = e.value();
                Some((e.attr("name")?.to_owned(), e.attr("value")?.to_owned()))
            })
            .collect();
        Ok(LoginForm {
            action: page.join(action).map_err(url_error)?,
            fields,
        })
    }

    /// Form fields with the credentials filled in, replacing any prefilled values.
    pub(crate) fn into_submission(self, credentials: &Credentials) -> Vec<(String, String)> {
        let mut fields = self.fields;
        fields.retain(|(name, _)| name != USERNAME_FIELD && name != PASSWORD_FIELD);
        fields.push((USERNAME_FIELD.to_owned(), credentials.username().to_owned()));
        fields.push((PASSWORD_FIELD.to_owned(), credentials.password().to_owned()));
        fields
    }
}
