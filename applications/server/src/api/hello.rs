/// GET /hello - Plain-text greeting used by load probes
pub async fn hello() -> &'static str {
    "Hello from Roster"
}
