#[tokio::main]
async fn main() -> anyhow::Result<()> {
    calisma_backend::run().await
}
