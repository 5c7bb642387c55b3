#![allow(dead_code)]

use wiremock::{
    matchers::{method, path},
    Match, Mock, MockServer, Request, ResponseTemplate,
};

pub const LOGIN_PAGE: &str = r#"<html><body>
<div id="login">
<form id="fm1" class="fm-v clearfix" action="/cas/login" method="post">
  <input id="username" name="username" type="text" value="" />
  <input id="password" name="password" type="password" value="" />
  <input type="hidden" name="lt" value="X" />
  <input type="hidden" name="execution" value="Y" />
</form>
</div>
</body></html>"#;

pub const SUCCESS_PAGE: &str = r#"<html><body>
<div id="msg" class="success"><h2>Log In Successful</h2></div>
</body></html>"#;

pub const FAILURE_PAGE: &str = r#"<html><body>
<div id="msg" class="errors">The credentials you provided cannot be determined to be authentic.</div>
</body></html>"#;

pub const TICKET_COOKIE: &str = "CASTGC=TGT-1-davislib";

pub fn init_logger() {
    let _ = pretty_env_logger::try_init_timed();
}

pub fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.to_owned(), "text/html; charset=utf-8")
}

/// Matches requests whose `Cookie` header carries `cookie`.
pub struct HasCookie(pub &'static str);

impl Match for HasCookie {
    fn matches(&self, request: &Request) -> bool {
        request
            .headers
            .get("cookie")
            .and_then(|v| v.to_str().ok())
            .map_or(false, |v| v.split("; ").any(|c| c == self.0))
    }
}

/// Matches requests that do not carry `cookie`.
pub struct LacksCookie(pub &'static str);

impl Match for LacksCookie {
    fn matches(&self, request: &Request) -> bool {
        !HasCookie(self.0).matches(request)
    }
}

/// An application page at `endpoint` that redirects to the CAS login page
/// until the ticket cookie is presented.
pub async fn mount_protected_page(app: &MockServer, cas: &MockServer, endpoint: &'static str) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .and(HasCookie(TICKET_COOKIE))
        .respond_with(html("<html><body>schedule</body></html>"))
        .named("authenticated page")
        .mount(app)
        .await;
    Mock::given(method("GET"))
        .and(path(endpoint))
        .and(LacksCookie(TICKET_COOKIE))
        .respond_with(ResponseTemplate::new(302).insert_header(
            "location",
            format!("{}/cas/login?service={}{}", cas.uri(), app.uri(), endpoint).as_str(),
        ))
        .named("redirect to login")
        .mount(app)
        .await;
}
