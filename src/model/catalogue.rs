//! Source of menu items: a built-in generator or a JSON file.

use super::error::CatalogueError;
use super::menu::MenuItem;
use std::path::Path;
use tracing::info;

const LABELS: [&str; 8] = [
    "Overview",
    "Analytics",
    "Billing and invoices",
    "Team members",
    "Integrations",
    "Security settings and audit log",
    "Release notes",
    "Support",
];

/// Every `EXPANDABLE_EVERY`-th generated item carries children.
const EXPANDABLE_EVERY: usize = 4;

/// Children per generated expandable item.
const GENERATED_CHILDREN: usize = 3;

/// Where menu items come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Catalogue {
    /// Deterministic, unbounded item generator.
    Generated,
    /// Fixed list loaded from a file.
    Loaded(Vec<MenuItem>),
}

impl Catalogue {
    /// Load a catalogue from a JSON array of tagged items.
    pub fn from_file(path: &Path) -> Result<Self, CatalogueError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogueError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let items: Vec<MenuItem> =
            serde_json::from_str(&contents).map_err(|source| CatalogueError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        info!(path = ?path, items = items.len(), "Loaded menu catalogue");
        Ok(Catalogue::Loaded(items))
    }

    /// Maximum number of items, `None` when unbounded.
    pub fn capacity(&self) -> Option<usize> {
        match self {
            Catalogue::Generated => None,
            Catalogue::Loaded(items) => Some(items.len()),
        }
    }

    /// Item at `index`, if the catalogue has one.
    pub fn item(&self, index: usize) -> Option<MenuItem> {
        match self {
            Catalogue::Generated => Some(generated_item(index)),
            Catalogue::Loaded(items) => items.get(index).cloned(),
        }
    }
}

fn generated_item(index: usize) -> MenuItem {
    let number = index + 1;
    let label = format!("{} {}", LABELS[index % LABELS.len()], number);

    if index % EXPANDABLE_EVERY == EXPANDABLE_EVERY - 1 {
        let children = (1..=GENERATED_CHILDREN)
            .map(|child| format!("Section {}.{}", number, child))
            .collect();
        MenuItem::expandable(label, children)
    } else {
        MenuItem::leaf(label)
    }
}
