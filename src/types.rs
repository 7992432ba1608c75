//! Shared types serialized between the builder and the runtime.
//!
//! The builder writes a [`Manifest`] to `sidebar.json`; the runtime fetches and
//! deserializes the same file to draw the sidebar. Field names are the wire
//! format and must not change independently on either side.

use serde::{Deserialize, Serialize, Serializer};

/// Navigation manifest: sections in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub sections: Vec<Section>,
}

/// One sidebar section, built from a category folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub items: Vec<NavEntry>,
}

/// A single link in the sidebar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavEntry {
    pub title: String,
    /// Site-root-relative path with `/` separators, `.md` included.
    pub path: String,
    #[serde(serialize_with = "serialize_weight")]
    pub weight: f64,
}

/// Whole weights are written as JSON integers, `5` rather than `5.0`.
fn serialize_weight<S: Serializer>(weight: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    let whole = weight.fract() == 0.0 && weight.abs() < i64::MAX as f64;
    if whole {
        serializer.serialize_i64(*weight as i64)
    } else {
        serializer.serialize_f64(*weight)
    }
}

impl Manifest {
    /// Every item path, in manifest order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.sections
            .iter()
            .flat_map(|s| s.items.iter())
            .map(|item| item.path.as_str())
    }
}
