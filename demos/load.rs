use std::collections::HashMap;

use envload::{Loader, Options};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), envload::Error> {
    // RUST_LOG=envload=trace shows skipped lines and kept values too.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("envload=debug")),
        )
        .init();

    // Layered files into an isolated store; `.env.local` is optional.
    let mut env: HashMap<String, String> = HashMap::new();
    Loader::builder()
        .with_file("demos/default.env", true)
        .with_file("demos/local.env", false)
        .override_existing(true)
        .load_into(&mut env)?;

    let mut keys: Vec<_> = env.keys().collect();
    keys.sort();
    for key in keys {
        println!("{key}={}", env[key]);
    }

    // Same file into the real process environment, keeping anything already set.
    envload::load_from_path_into(
        "demos/default.env",
        &mut envload::ProcessEnv,
        &Options::new().debug(true),
    )?;

    println!(
        "APP_NAME from process env: {}",
        std::env::var("APP_NAME").unwrap_or_default()
    );

    Ok(())
}
