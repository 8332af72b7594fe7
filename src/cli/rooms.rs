use anyhow::Result;

use crate::config::AtriaConfig;

/// List rooms in creation order with member counts.
pub fn rooms(config: &AtriaConfig) -> Result<()> {
    let lobby = super::open_lobby(config)?;

    if lobby.rooms().is_empty() {
        println!("No rooms yet.");
        return Ok(());
    }

    println!("{} room(s):\n", lobby.rooms().len());
    for room in lobby.rooms().iter() {
        let occupants: Vec<&str> = lobby
            .records()
            .iter()
            .filter(|record| record.room.as_deref() == Some(room.id.as_str()))
            .map(|record| record.name.as_str())
            .collect();
        println!(
            "  {} — {} member(s): {}",
            room.id,
            room.members.len(),
            occupants.join(", ")
        );
    }

    Ok(())
}
