#![allow(dead_code)]

use std::net::{IpAddr, SocketAddr};

use sqlx::PgPool;
use tokio::net::TcpListener;
use tonic::transport::Channel;

use userstore_api::config::ServerConfig;
use userstore_api::proto::user_v1_client::UserV1Client;
use userstore_api::proto::{Role, User};
use userstore_api::server;

/// Build a test `ServerConfig` bound to an ephemeral loopback port.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        database_url: String::new(),
        host: IpAddr::from([127, 0, 0, 1]),
        port: 0,
        max_connections: 5,
        request_timeout_secs: None,
    }
}

/// Start the full gRPC server (user service + reflection) on an ephemeral
/// port and return the address it is listening on.
///
/// The server runs until the test's runtime shuts down.
pub async fn spawn_server(pool: PgPool) -> SocketAddr {
    let config = test_config();
    let listener = TcpListener::bind(config.addr()).await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        server::serve(listener, pool, &config, std::future::pending())
            .await
            .unwrap();
    });

    addr
}

/// Spawn a server and return a connected `UserV1` client.
pub async fn client(pool: PgPool) -> UserV1Client<Channel> {
    let addr = spawn_server(pool).await;
    UserV1Client::connect(format!("http://{addr}")).await.unwrap()
}

/// The "Ann" fixture used throughout the API tests.
pub fn ann() -> User {
    User {
        name: "Ann".to_string(),
        surname: "Lee".to_string(),
        email: "ann@example.com".to_string(),
        avatar: "https://cdn.example.com/ann.png".to_string(),
        login: "ann".to_string(),
        password: "secret".to_string(),
        role: Role::User as i32,
        weight: 60.5,
        height: 170.0,
        locked: false,
    }
}

/// A user with distinct name and login derived from `login`.
pub fn user_named(login: &str) -> User {
    User {
        name: login.to_string(),
        login: login.to_string(),
        email: format!("{login}@example.com"),
        ..ann()
    }
}
