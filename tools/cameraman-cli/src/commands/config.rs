//! Show the effective configuration.

use cameraman_common::config::AppConfig;

pub fn run(config: &AppConfig) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    if let Err(e) = config.validate() {
        println!();
        println!("[WARN] {e}");
    }
    Ok(())
}
