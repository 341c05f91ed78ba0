//! Check command handler
//!
//! Rebuilds the manifest in memory and compares it against the
//! `contents.json` already on disk. Intended as a CI gate: exits non-zero
//! when the manifest is stale or missing.

use std::path::Path;

use anyhow::{bail, Result};

use scenemap::{BuildPipeline, Manifest};

pub fn cmd_check(base: &Path, tag: &str, json: bool, _verbose: u8) -> Result<()> {
    let pipeline = BuildPipeline::new(base, tag);
    let outcome = pipeline.run()?;

    // The first output is the JSON artifact; its path is where the
    // existing manifest must live.
    let manifest_path = outcome.outputs[0].path();

    let on_disk: Option<Manifest> = std::fs::read_to_string(manifest_path)
        .ok()
        .and_then(|content| serde_json::from_str(&content).ok());

    let fresh = on_disk.as_ref() == Some(&outcome.manifest);

    if json {
        let event = serde_json::json!({
            "event": "data",
            "command": "check",
            "fresh": fresh,
            "hashed": outcome.hashed,
        });
        println!("{event}");
    }

    if !fresh {
        match on_disk {
            None => bail!(
                "no readable manifest at {}; run `scenemap build`",
                manifest_path.display()
            ),
            Some(_) => bail!("contents.json is out of date; run `scenemap build`"),
        }
    }

    if !json {
        println!("contents.json is up to date ({} files)", outcome.hashed);
    }
    Ok(())
}
