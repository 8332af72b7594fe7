use anyhow::Result;

use crate::config::AtriaConfig;

/// Print the nearest stored profiles to the named one.
pub fn neighbors(config: &AtriaConfig, name: &str, k: Option<usize>) -> Result<()> {
    let lobby = super::open_lobby(config)?;
    let k = k.unwrap_or(config.pipeline.default_neighbors);

    let results = lobby.neighbors_of(name, k)?;
    if results.is_empty() {
        println!("No neighbors found.");
        return Ok(());
    }

    println!("Nearest {} neighbor(s) of '{}':\n", results.len(), name);
    for (i, neighbor) in results.iter().enumerate() {
        println!(
            "  {}. {} (distance: {:.4})",
            i + 1,
            neighbor.name,
            neighbor.distance
        );
    }

    Ok(())
}
