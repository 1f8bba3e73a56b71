//! End-to-end tests over a real TCP socket.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use greeting_server::config::ServerConfig;
use greeting_server::greetings;
use greeting_server::http::HttpServer;

/// Bind an ephemeral port and run the server in the background.
async fn start_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(&ServerConfig::default(), greetings::routes());
    tokio::spawn(async move {
        server.run(listener).await.unwrap();
    });

    addr
}

#[tokio::test]
async fn serves_greetings_over_tcp() {
    let addr = start_server().await;

    let body = reqwest::get(format!("http://{addr}/"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "Hello world!");

    let body = reqwest::get(format!("http://{addr}/hello/Bob"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "Hello Bob!");
}

#[tokio::test]
async fn unmatched_requests_get_404() {
    let addr = start_server().await;

    let response = reqwest::get(format!("http://{addr}/unknown")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

    let response = reqwest::get(format!("http://{addr}/hello/")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}
