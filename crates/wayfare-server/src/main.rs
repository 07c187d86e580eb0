#[tokio::main]
async fn main() -> anyhow::Result<()> {
    wayfare_server::start_server().await
}
