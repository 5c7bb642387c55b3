pub mod client {
    pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_10_1) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/40.0.2214.115 Safari/537.36";
    pub const VERBOSE: bool = false;
}
pub mod cas {
    pub const BASE: &str = "https://cas.ucdavis.edu";
    pub const LOGIN_ENDPOINT: &str = "/cas/login";
    pub const FORM_ID: &str = "fm1";
    pub const SUCCESS_SELECTOR: &str = r#"div#msg.success"#;
    pub const USERNAME_FIELD: &str = "username";
    pub const PASSWORD_FIELD: &str = "password";
}
