#[tokio::main]
async fn main() {
    ksnackface_relay::start_server().await;
}
