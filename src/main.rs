//! Generates the ServiceNow Incident Management overview deck.
//!
//! Running the binary writes `ServiceNow_Incident_Management.pptx` into
//! the current working directory, replacing any previous file, and
//! prints a short confirmation.

use slideberry::deck::{OUTPUT_FILE, build_deck};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> slideberry::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("building presentation deck");

    let presentation = build_deck();
    presentation.save(OUTPUT_FILE)?;

    println!("✅ PowerPoint presentation created successfully!");
    println!("📁 File: {OUTPUT_FILE}");
    println!("📊 Slides: {}", presentation.slide_count());

    Ok(())
}
