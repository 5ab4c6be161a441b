use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Serialize, de::DeserializeOwned};

pub fn load_json<T, P>(path: P) -> anyhow::Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let contents =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parsing {}", path.display()))
}

pub fn save_json<T, P>(data: &T, path: P) -> anyhow::Result<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let serialized = serde_json::to_string_pretty(data)?;
    fs::write(path, serialized).with_context(|| format!("writing {}", path.display()))
}
