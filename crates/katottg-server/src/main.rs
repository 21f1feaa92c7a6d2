#[tokio::main]
async fn main() {
    katottg_server::start_server().await;
}
