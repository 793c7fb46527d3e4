use std::io::BufRead;

use oneshotd::config::Config;
use oneshotd::server::Server;

/// The server owns its own runtime, so main stays synchronous: start, then
/// block on the operator console until a "stop" line arrives.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;

    let mut server = Server::new();
    server.start(&cfg)?;

    tracing::info!("type 'stop' to shut down");
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().eq_ignore_ascii_case("stop") {
            break;
        }
    }

    server.stop();
    tracing::info!("server stopped");

    Ok(())
}
