//! NPC and item entity lists read from the game's data files
//!
//! Only the fields needed to name and color a sprite are read; everything else
//! in the documents is ignored.

use crate::constants::{DEFAULT_ITEM_NAME, DEFAULT_NPC_NAME};
use crate::error::{AssetError, AssetResult};
use serde::{Deserialize, Deserializer};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub const NPCS_FILE: &str = "npcs.json";
pub const ITEMS_FILE: &str = "items.json";

// Explicit nulls are treated like missing fields, so one bad entry only
// skips itself instead of failing the whole document.

#[derive(Debug, Clone, Deserialize)]
pub struct NpcEntry {
    #[serde(default = "default_npc_name", deserialize_with = "npc_name_or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub sprite: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemEntry {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub id: String,
    #[serde(default = "default_item_name", deserialize_with = "item_name_or_default")]
    pub name: String,
}

fn default_npc_name() -> String {
    DEFAULT_NPC_NAME.to_string()
}

fn default_item_name() -> String {
    DEFAULT_ITEM_NAME.to_string()
}

fn string_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn npc_name_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_npc_name))
}

fn item_name_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_item_name))
}

#[derive(Debug, Deserialize)]
struct NpcDocument {
    #[serde(default)]
    npcs: Vec<NpcEntry>,
}

#[derive(Debug, Deserialize)]
struct ItemDocument {
    #[serde(default)]
    items: Vec<ItemEntry>,
}

fn read_document<T: DeserializeOwned>(path: &Path) -> AssetResult<T> {
    if !path.exists() {
        return Err(AssetError::MissingInput {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| AssetError::InvalidInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Load `{"npcs": [...]}`
pub fn load_npcs(path: &Path) -> AssetResult<Vec<NpcEntry>> {
    read_document::<NpcDocument>(path).map(|doc| doc.npcs)
}

/// Load `{"items": [...]}`
pub fn load_items(path: &Path) -> AssetResult<Vec<ItemEntry>> {
    read_document::<ItemDocument>(path).map(|doc| doc.items)
}

/// True if `key` can be used directly as an output file stem
pub fn is_plain_file_stem(key: &str) -> bool {
    !key.is_empty()
        && key != "."
        && key != ".."
        && !key.contains(['/', '\\'])
        && !key.contains("..")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_npcs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(NPCS_FILE);
        fs::write(
            &path,
            r#"{"npcs": [
                {"name": "Old Sam", "sprite": "bartender", "dialog": "bar_01"},
                {"sprite": "cat"},
                {"name": "Nobody"}
            ]}"#,
        )
        .unwrap();

        let npcs = load_npcs(&path).unwrap();
        assert_eq!(npcs.len(), 3);
        assert_eq!(npcs[0].name, "Old Sam");
        assert_eq!(npcs[0].sprite, "bartender");
        assert_eq!(npcs[1].name, DEFAULT_NPC_NAME);
        assert_eq!(npcs[2].sprite, "");
    }

    #[test]
    fn test_load_items() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(ITEMS_FILE);
        fs::write(&path, r#"{"items": [{"id": "brass_key"}, {"id": "potion", "name": "Potion"}]}"#)
            .unwrap();

        let items = load_items(&path).unwrap();
        assert_eq!(items[0].id, "brass_key");
        assert_eq!(items[0].name, DEFAULT_ITEM_NAME);
        assert_eq!(items[1].name, "Potion");
    }

    #[test]
    fn test_missing_key_is_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(ITEMS_FILE);
        fs::write(&path, "{}").unwrap();
        assert!(load_items(&path).unwrap().is_empty());
    }

    #[test]
    fn test_null_fields_only_affect_their_entry() {
        let dir = tempfile::tempdir().unwrap();
        let npcs_path = dir.path().join(NPCS_FILE);
        fs::write(
            &npcs_path,
            r#"{"npcs": [
                {"name": "Ghost", "sprite": null},
                {"name": null, "sprite": "bartender"}
            ]}"#,
        )
        .unwrap();
        let npcs = load_npcs(&npcs_path).unwrap();
        assert_eq!(npcs[0].sprite, "");
        assert_eq!(npcs[1].name, DEFAULT_NPC_NAME);
        assert_eq!(npcs[1].sprite, "bartender");

        let items_path = dir.path().join(ITEMS_FILE);
        fs::write(&items_path, r#"{"items": [{"id": null}, {"id": "rope", "name": null}]}"#).unwrap();
        let items = load_items(&items_path).unwrap();
        assert_eq!(items[0].id, "");
        assert_eq!(items[1].id, "rope");
        assert_eq!(items[1].name, DEFAULT_ITEM_NAME);
    }

    #[test]
    fn test_missing_file() {
        let err = load_npcs(Path::new("no/such/npcs.json")).unwrap_err();
        assert!(matches!(err, AssetError::MissingInput { .. }));
    }

    #[test]
    fn test_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(NPCS_FILE);
        fs::write(&path, "{\"npcs\": [").unwrap();
        let err = load_npcs(&path).unwrap_err();
        assert!(matches!(err, AssetError::InvalidInput { .. }));
    }

    #[test]
    fn test_file_stems() {
        assert!(is_plain_file_stem("bartender"));
        assert!(is_plain_file_stem("rusty_key.v2"));
        assert!(!is_plain_file_stem(""));
        assert!(!is_plain_file_stem("../evil"));
        assert!(!is_plain_file_stem("a/b"));
        assert!(!is_plain_file_stem("a\\b"));
    }
}
