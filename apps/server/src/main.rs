#[tokio::main]
async fn main() -> anyhow::Result<()> {
    black_belt_practice_server::run().await
}
