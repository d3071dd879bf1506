use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    traces: HashMap<String, String>,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn load_json<T: DeserializeOwned>(rel: &str) -> Result<T> {
    let text = read_to_string(rel)?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse JSON fixture {rel}"))
}

fn lookup<'a, T>(map: &'a HashMap<String, T>, kind: &str, name: &str) -> Result<&'a T> {
    map.get(name)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

/// Golden step traces: an input, the highlight emitted by every step, and the
/// sorted result.
pub mod traces {
    use super::*;

    #[derive(Debug, Clone, Deserialize)]
    pub struct Mark {
        pub index: usize,
        /// `"red"` or `"green"`.
        pub color: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct Trace {
        pub name: String,
        /// `"bubble"`, `"insertion"` or `"quick"`.
        pub algorithm: String,
        pub input: Vec<i64>,
        pub steps: Vec<Vec<Mark>>,
        pub sorted: Vec<i64>,
    }

    pub fn keys() -> Vec<String> {
        let mut keys: Vec<String> = MANIFEST.traces.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn load(name: &str) -> Result<Trace> {
        let rel = lookup(&MANIFEST.traces, "trace", name)?;
        super::load_json(rel)
    }
}
