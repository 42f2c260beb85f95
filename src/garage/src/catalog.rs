//! Item catalog builder
//!
//! Parses the flat in-game items dataset (CSV rows of
//! `id,category,external_key,display_name`) into one sorted bucket per
//! registered category. Display names that collide within a category are
//! disambiguated with a parenthetical specifier derived from the item's
//! external key, so a pick-list never shows two identical labels for
//! different items.
//!
//! The builder is pure and infallible: malformed rows and rows for
//! untracked categories are skipped, never reported. An empty or entirely
//! malformed dataset yields a catalog whose every bucket is empty.

use crate::itemtypes::ItemType;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Item ids excluded from every bucket regardless of category.
///
/// Promotional drop items ("Black Market Drop", "Exotic Drop", ...) that
/// carry the category "Body" in the dataset but are not selectable bodies.
pub const EXCLUDED_IDS: &[u32] = &[5364, 5365, 5366, 5367, 5368, 5369];

/// One well-formed record from the raw dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub id: u32,
    pub category: String,
    pub external_key: String,
    pub display_name: String,
}

impl RawRow {
    /// Parse one dataset line.
    ///
    /// Returns `None` for lines with fewer than four comma-separated
    /// fields or a non-numeric first field. Fields past the fourth are
    /// ignored.
    pub fn parse(line: &str) -> Option<RawRow> {
        let mut fields = line.split(',');
        let id = fields.next()?.parse::<u32>().ok()?;
        let category = fields.next()?;
        let external_key = fields.next()?;
        let display_name = fields.next()?;

        Some(RawRow {
            id,
            category: category.to_string(),
            external_key: external_key.to_string(),
            display_name: display_name.to_string(),
        })
    }
}

/// One selectable item in a category bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub id: u32,
    pub external_key: String,
    /// Display name, possibly extended with a disambiguating specifier
    pub name: String,
}

/// Per-category, disambiguated, sorted item catalog.
///
/// Every category declared in the registry is present as a key, even when
/// no rows matched it. Built once per dataset load; read-only afterwards.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    buckets: BTreeMap<String, Vec<CatalogEntry>>,
}

impl Catalog {
    /// Build a catalog from parsed rows and the slot registry.
    ///
    /// Rows for categories outside the registry and rows whose id is in
    /// [`EXCLUDED_IDS`] are dropped. Within each bucket, colliding display
    /// names are disambiguated and entries are sorted case-insensitively
    /// by resolved name.
    pub fn build<I>(rows: I, types: &[ItemType]) -> Catalog
    where
        I: IntoIterator<Item = RawRow>,
    {
        let mut buckets: BTreeMap<String, Vec<CatalogEntry>> = BTreeMap::new();

        // Seed every registered category so consumers always see the full
        // key set, matched or not
        for item_type in types {
            buckets.entry(item_type.category.to_string()).or_default();
        }

        for row in rows {
            if EXCLUDED_IDS.contains(&row.id) {
                continue;
            }
            let Some(bucket) = buckets.get_mut(&row.category) else {
                continue;
            };
            bucket.push(CatalogEntry {
                id: row.id,
                external_key: row.external_key,
                name: row.display_name,
            });
        }

        for (category, bucket) in &mut buckets {
            disambiguate(bucket, category);
            bucket.sort_by_cached_key(|e| e.name.to_lowercase());
        }

        Catalog { buckets }
    }

    /// Parse raw CSV text and build a catalog from it.
    ///
    /// Lines are newline-delimited (`\n` or `\r\n`); unparsable lines are
    /// skipped.
    pub fn from_csv(text: &str, types: &[ItemType]) -> Catalog {
        Self::build(text.lines().filter_map(RawRow::parse), types)
    }

    /// Entries for one category, sorted by name. Empty for categories
    /// with no matches and for unregistered categories.
    pub fn entries(&self, category: &str) -> &[CatalogEntry] {
        self.buckets.get(category).map_or(&[], Vec::as_slice)
    }

    /// All category labels present in the catalog
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }

    /// Iterate buckets as (category, entries) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[CatalogEntry])> {
        self.buckets.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Total entry count across all buckets
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Rename colliding display names within one bucket, in place.
///
/// Single left-to-right scan tracking, per original name, the index of its
/// first occurrence and whether that occurrence still needs renaming. On a
/// repeat sighting the current entry is renamed; the first occurrence is
/// renamed once, retroactively, so both siblings become distinguishable.
fn disambiguate(bucket: &mut [CatalogEntry], category: &str) {
    // original name -> (first occurrence index, first still unnamed)
    let mut seen: HashMap<String, (usize, bool)> = HashMap::new();

    for i in 0..bucket.len() {
        let name = bucket[i].name.clone();

        match seen.get_mut(&name) {
            Some((first_idx, pending)) => {
                let first_idx = *first_idx;
                if std::mem::take(pending) {
                    if let Some(renamed) = specifier_name(&bucket[first_idx], category) {
                        bucket[first_idx].name = renamed;
                    }
                }
                if let Some(renamed) = specifier_name(&bucket[i], category) {
                    bucket[i].name = renamed;
                }
            }
            None => {
                seen.insert(name, (i, true));
            }
        }
    }
}

/// Compute the disambiguated name for an entry, or `None` when the
/// specifier degenerates to nothing.
///
/// The specifier is the last dot segment of the external key, lower-cased,
/// with the category label and any "body: qualifier" prefix of the display
/// name stripped out, then title-cased.
///
/// Known edge case kept from the original design: an empty specifier
/// leaves the name untouched, which can leave a true duplicate in the
/// bucket (two identically named, differently inventoried items).
fn specifier_name(entry: &CatalogEntry, category: &str) -> Option<String> {
    let last = entry.external_key.rsplit('.').next()?;
    if last.is_empty() {
        return None;
    }

    let mut specifier = last.to_lowercase().replacen(&category.to_lowercase(), "", 1);

    if let Some((prefix, _)) = entry.name.split_once(':') {
        specifier = specifier.replacen(&prefix.to_lowercase(), "", 1);
    }

    let specifier = title_case(&specifier);
    if specifier.is_empty() {
        return None;
    }

    Some(format!("{} ({})", entry.name, specifier))
}

/// Title-case a specifier: underscores become spaces, each word gets an
/// upper-case first letter and lower-case remainder.
fn title_case(s: &str) -> String {
    s.replace('_', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
