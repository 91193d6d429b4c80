//! List site content

use anyhow::Result;
use indexmap::IndexMap;

use crate::Portal;

/// List the feed or its categories
pub fn run(portal: &Portal, content_type: &str, lang: Option<&str>) -> Result<()> {
    let lang = lang.unwrap_or(&portal.config.language);
    let items = portal.load_feed(lang)?;

    match content_type {
        "post" | "posts" => {
            println!("Posts ({}):", items.len());
            for item in &items {
                println!(
                    "  {} - {} [{}] {}",
                    item.date.format("%Y-%m-%d"),
                    item.title,
                    item.category_key,
                    item.link
                );
            }
        }
        "category" | "categories" => {
            let universe = portal.config.category_universe();
            let mut counts: IndexMap<String, usize> = universe
                .keys()
                .map(|key| (key.as_str().to_string(), 0))
                .collect();
            for item in &items {
                *counts
                    .entry(item.category_key.as_str().to_string())
                    .or_insert(0) += 1;
            }

            println!("Categories ({}):", universe.len());
            for (key, count) in counts {
                let label = universe
                    .label(&key.as_str().into())
                    .unwrap_or("(unknown)");
                println!("  {} - {} ({})", key, label, count);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, category",
                content_type
            );
        }
    }

    Ok(())
}
