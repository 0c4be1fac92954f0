#[tokio::main]
async fn main() {
    concert_hire_backend::run().await;
}
