use tokio::net::TcpListener;

use mock_server::InviteApi;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    println!("invite endpoint listening on {addr}");
    mock_server::run(listener, InviteApi::shared()).await
}
