use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{debug, warn};

use crate::models::Item;
use crate::utils::validate_file_size;

const MAX_CONSECUTIVE_ERRORS: usize = 100;

/// Read an item file from disk (JSON array or JSON Lines)
pub fn parse_items_file(path: &Path) -> Result<Vec<Item>> {
    // Open file and validate size on the same handle we read from
    let mut file =
        File::open(path).with_context(|| format!("Failed to open item file: {}", path.display()))?;
    validate_file_size(&file, path)?;

    let mut content = String::new();
    file.read_to_string(&mut content)
        .with_context(|| format!("Failed to read item file: {}", path.display()))?;

    let items = parse_items(&content)
        .with_context(|| format!("Failed to parse item file: {}", path.display()))?;
    debug!(path = %path.display(), count = items.len(), "loaded items");
    Ok(items)
}

/// Parse item data from a string, detecting the layout from the first character
pub fn parse_items(content: &str) -> Result<Vec<Item>> {
    let trimmed = content.trim_start();
    let items = if trimmed.is_empty() {
        Vec::new()
    } else if trimmed.starts_with('[') {
        serde_json::from_str::<Vec<Item>>(trimmed).context("Invalid JSON item array")?
    } else {
        parse_json_lines(content)?
    };

    Ok(dedup_by_id(items))
}

fn parse_json_lines(content: &str) -> Result<Vec<Item>> {
    let mut items = Vec::new();
    let mut skipped_count = 0;
    let mut total_lines = 0;
    let mut consecutive_errors = 0;

    for (line_num, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        total_lines += 1;

        match serde_json::from_str::<Item>(line) {
            Ok(item) => {
                items.push(item);
                consecutive_errors = 0;
            }
            Err(e) => {
                warn!(line = line_num + 1, error = %e, "skipping malformed item line");
                skipped_count += 1;
                consecutive_errors += 1;

                if consecutive_errors >= MAX_CONSECUTIVE_ERRORS {
                    bail!(
                        "Too many consecutive parse errors ({}) in item file - file may be corrupted",
                        consecutive_errors
                    );
                }
            }
        }
    }

    if total_lines > 0 {
        let failure_rate = (skipped_count as f64) / (total_lines as f64);
        if failure_rate > 0.5 {
            bail!(
                "Too many parse failures in item file: {} of {} lines failed ({:.1}%)",
                skipped_count,
                total_lines,
                failure_rate * 100.0
            );
        }
    }

    Ok(items)
}

fn dedup_by_id(items: Vec<Item>) -> Vec<Item> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| {
            let first = seen.insert(item.id.clone());
            if !first {
                warn!(id = %item.id, "dropping item with duplicate id");
            }
            first
        })
        .collect()
}
