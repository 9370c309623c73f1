use anyhow::Result;
use tracing::warn;

use crate::bookmarks::{Favorites, FileStore, KeyValueStore, MemoryStore};
use crate::config::Config;

pub fn run(config: &Config, toggle: Option<&str>) -> Result<()> {
    let store: Box<dyn KeyValueStore> = match &config.favorites_dir {
        Some(dir) => Box::new(FileStore::new(dir.clone())),
        None => {
            warn!("PAGEDECK_FAVORITES not set; favorites will not persist");
            Box::new(MemoryStore::default())
        }
    };

    let mut favorites = Favorites::load(store);

    if let Some(tool) = toggle {
        let added = favorites.toggle(tool)?;
        if added {
            println!("Added {tool} to favorites");
        } else {
            println!("Removed {tool} from favorites");
        }
        return Ok(());
    }

    if favorites.iter().next().is_none() {
        println!("No favorites.");
    } else {
        for tool in favorites.iter() {
            println!("{tool}");
        }
    }

    Ok(())
}
