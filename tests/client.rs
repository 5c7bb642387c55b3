mod common;

use common::{html, init_logger, HasCookie};
use davislib::{Application, HttpClient, ProtectedClient};
use wiremock::{
    matchers::{body_string_contains, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

#[tokio::test]
async fn shared_client_presents_cookies_set_later() {
    init_logger();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).insert_header("set-cookie", "token=abc; Path=/"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/whoami"))
        .and(HasCookie("token=abc"))
        .respond_with(html("aggie"))
        .expect(1)
        .mount(&server)
        .await;

    let a = HttpClient::new(&server.uri()).unwrap();
    let b = HttpClient::shared(&server.uri(), &a).unwrap();
    a.get("/login").await.unwrap();

    let response = b.get("/whoami").await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await.unwrap(), "aggie");
}

#[tokio::test]
async fn unshared_clients_keep_separate_cookies() {
    init_logger();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).insert_header("set-cookie", "token=abc; Path=/"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/whoami"))
        .and(HasCookie("token=abc"))
        .respond_with(html("aggie"))
        .expect(0)
        .mount(&server)
        .await;

    let a = HttpClient::new(&server.uri()).unwrap();
    let b = HttpClient::new(&server.uri()).unwrap();
    a.get("/login").await.unwrap();

    let response = b.get("/whoami").await.unwrap();
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn protected_client_shares_with_plain_client() {
    init_logger();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).insert_header("set-cookie", "token=abc; Path=/"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/whoami"))
        .and(HasCookie("token=abc"))
        .respond_with(html("aggie"))
        .expect(1)
        .mount(&server)
        .await;

    let plain = HttpClient::new(&server.uri()).unwrap();
    let protected = ProtectedClient::builder(server.uri())
        .shared(&plain)
        .build()
        .unwrap();
    plain.get("/login").await.unwrap();
    assert!(protected.session().ptr_eq(plain.session()));

    let response = protected.get("/whoami").await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn sends_browser_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(header(
            "user-agent",
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_10_1) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/40.0.2214.115 Safari/537.36",
        ))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&server.uri()).unwrap();
    assert_eq!(client.get("/").await.unwrap().status().as_u16(), 200);
}

#[tokio::test]
async fn forwards_request_options() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .and(header("x-requested-with", "XMLHttpRequest"))
        .and(body_string_contains("termCode=201410"))
        .respond_with(html("results"))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&server.uri()).unwrap();
    let response = client
        .post_with("/search", |r| {
            r.header("x-requested-with", "XMLHttpRequest")
                .form(&[("termCode", "201410")])
        })
        .await
        .unwrap();
    assert_eq!(response.text().await.unwrap(), "results");
}

#[tokio::test]
async fn error_status_is_returned_raw() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = HttpClient::new(&server.uri()).unwrap();
    let response = client.get("/missing").await.unwrap();
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn response_reports_final_url_after_redirects() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(ResponseTemplate::new(302).insert_header("location", "/new"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/new"))
        .respond_with(html("moved"))
        .mount(&server)
        .await;

    let client = HttpClient::new(&server.uri()).unwrap();
    let response = client.get("/old").await.unwrap();
    assert_eq!(response.url().path(), "/new");
}

#[test]
fn cookieless_application_cannot_be_shared() {
    let public = HttpClient::cookieless("https://registrar.ucdavis.edu").unwrap();
    let err = HttpClient::shared("https://sisweb.ucdavis.edu", &public)
        .err()
        .unwrap();
    assert!(err.is_config());
}
