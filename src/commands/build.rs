//! Build command handler

use std::path::Path;

use anyhow::Result;

use scenemap::{write_outputs, BuildPipeline};

pub fn cmd_build(base: &Path, tag: &str, json: bool, verbose: u8) -> Result<()> {
    let pipeline = BuildPipeline::new(base, tag);
    let outcome = pipeline.run()?;

    write_outputs(&outcome.outputs)?;

    if verbose > 0 {
        for (scene, files) in &outcome.manifest.scenes {
            eprintln!("  scene {scene}: {} files", files.len());
        }
        if verbose > 1 {
            for (rel, hash) in &outcome.manifest.shared {
                eprintln!("  shared {rel} {hash}");
            }
        }
    }

    if json {
        let event = serde_json::json!({
            "event": "data",
            "command": "build",
            "version": outcome.manifest.version,
            "hashed": outcome.hashed,
            "skipped": outcome.skipped,
            "scenes": outcome.manifest.scenes.len(),
        });
        println!("{event}");
        return Ok(());
    }

    println!(
        "manifest written: {} files hashed across {} scenes ({} skipped)",
        outcome.hashed,
        outcome.manifest.scenes.len(),
        outcome.skipped
    );
    Ok(())
}
