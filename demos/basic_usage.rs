//! Basic logger usage example
//!
//! Demonstrates installing a logger into an application context and logging
//! at different levels from components.
//!
//! Run with: cargo run --example basic_usage

use leveled_logger::prelude::*;
use leveled_logger::{debug, error, fatal, info, warn};
use serde_json::json;

fn main() -> Result<()> {
    println!("=== Leveled Logger - Basic Usage Example ===\n");

    let mut app = AppContext::new();
    install(
        &mut app,
        &json!({
            "logLevel": "debug",
            "showLogLevel": true,
            "showMethodName": true,
            "showConsoleColors": true,
            "separator": "|"
        }),
    )?;

    println!("1. Logging at different levels:");
    let home = app.component("Home")?;
    debug!(home.log(), at = "created"; "This is a debug message")?;
    info!(home.log(), at = "mounted"; "This is an info message", json!({ "items": 3 }))?;
    warn!(home.log(), "This is a warning message")?;
    error!(home.log(), "This is an error message")?;
    fatal!(home.log(), "This is a fatal message")?;

    println!("\n2. A stricter logger:");
    let mut strict = AppContext::new();
    install(&mut strict, &json!({ "logLevel": "warn", "stringifyArguments": true }))?;
    let panel = strict.component("Panel")?;
    debug!(panel.log(), "Debug message (hidden)")?;
    info!(panel.log(), "Info message (hidden)")?;
    warn!(panel.log(), "Warning with a payload", json!({ "retry": true }))?;

    println!("\n3. Rejected options:");
    let mut broken = AppContext::new();
    if let Err(e) = install(&mut broken, &json!({ "logLevel": "loud" })) {
        println!("   {}", e);
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
