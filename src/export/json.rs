//! JSON export of a game tree

use std::{fs::File, path::Path};

use crate::{Error, Result, game::GameTreeNode};

/// Write a game tree to a pretty-printed JSON file.
pub fn write_json(root: &GameTreeNode, path: &Path) -> Result<()> {
    let file = File::create(path)
        .map_err(|source| Error::io(format!("create JSON file {}", path.display()), source))?;
    serde_json::to_writer_pretty(file, root)?;
    Ok(())
}
