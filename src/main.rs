#[tokio::main]
async fn main() -> std::io::Result<()> {
    club_backend::run().await
}
