use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::warn;

/// Minimal persistence seam for small named values. Injected into
/// [`Favorites`] so the backing storage can be swapped without touching
/// the bookmark logic.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Stores each key as a file under a directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        FileStore { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("Failed to read key {key}")),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;
        std::fs::write(self.path_for(key), value)
            .with_context(|| format!("Failed to write key {key}"))
    }
}

/// In-memory store. Used in tests and when no favorites directory is
/// configured (favorites then last for the process only).
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<std::collections::HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

const FAVORITES_KEY: &str = "pagedeck_bookmarks";

/// The set of bookmarked tool identifiers. Loaded once at construction,
/// persisted after every mutation.
pub struct Favorites {
    tools: BTreeSet<String>,
    store: Box<dyn KeyValueStore>,
}

impl Favorites {
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let tools = match store.get(FAVORITES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(list) => list.into_iter().collect(),
                Err(err) => {
                    // Corrupt state degrades to an empty set.
                    warn!("failed to parse stored favorites: {err}");
                    BTreeSet::new()
                }
            },
            Ok(None) => BTreeSet::new(),
            Err(err) => {
                warn!("failed to load favorites: {err}");
                BTreeSet::new()
            }
        };
        Favorites { tools, store }
    }

    pub fn contains(&self, tool: &str) -> bool {
        self.tools.contains(tool)
    }

    /// Add the tool if absent, remove it if present. Returns true when
    /// the tool is bookmarked afterwards.
    pub fn toggle(&mut self, tool: &str) -> Result<bool> {
        let added = if self.tools.contains(tool) {
            self.tools.remove(tool);
            false
        } else {
            self.tools.insert(tool.to_string());
            true
        };
        self.save()?;
        Ok(added)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tools.iter().map(String::as_str)
    }

    fn save(&self) -> Result<()> {
        let list: Vec<&str> = self.tools.iter().map(String::as_str).collect();
        self.store.set(FAVORITES_KEY, &serde_json::to_string(&list)?)
    }
}
