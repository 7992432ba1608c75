//! Grouping and ordering of scanned content into the navigation manifest.
//!
//! Content files are grouped by category label. A category takes the order of
//! the first file seen for it, so two folders that title-case to the same
//! label merge into one section. Sections are sorted by order and items by
//! weight; both sorts are stable, so ties keep discovery order.

use crate::scan::ContentFile;
use crate::types::{Manifest, NavEntry, Section};
use std::fs;
use std::io;
use std::path::Path;

struct Group<'a> {
    label: &'a str,
    order: i64,
    files: Vec<&'a ContentFile>,
}

impl Manifest {
    /// Build the manifest from the visible content files, in discovery order.
    pub fn from_files(files: &[ContentFile]) -> Self {
        let mut groups: Vec<Group> = Vec::new();
        for file in files {
            match groups.iter_mut().find(|g| g.label == file.category) {
                Some(group) => group.files.push(file),
                None => groups.push(Group {
                    label: &file.category,
                    order: file.order,
                    files: vec![file],
                }),
            }
        }

        groups.sort_by_key(|g| g.order);

        let sections = groups
            .into_iter()
            .map(|mut group| {
                group.files.sort_by(|a, b| a.weight.total_cmp(&b.weight));
                Section {
                    title: group.label.to_string(),
                    items: group
                        .files
                        .into_iter()
                        .map(|f| NavEntry {
                            title: f.title.clone(),
                            path: f.path.clone(),
                            weight: f.weight,
                        })
                        .collect(),
                }
            })
            .collect();

        Manifest { sections }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Write the manifest as indented JSON, creating parent directories.
pub fn write_manifest(manifest: &Manifest, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = manifest.to_json().map_err(io::Error::other)?;
    fs::write(path, json)
}
