//! Info command implementation

use super::load;
use anyhow::Result;
use serde::Serialize;

/// Clippings summary output
#[derive(Serialize)]
struct ClippingsInfo {
    books: usize,
    highlights: usize,
    titles: Vec<TitleInfo>,
}

#[derive(Serialize)]
struct TitleInfo {
    title: String,
    author: String,
    highlights: usize,
}

/// Display information about a clippings export
pub async fn info(input: Option<&str>, json: bool) -> Result<()> {
    let Some(conversion) = load(input).await? else {
        return Ok(());
    };
    let library = &conversion.library;

    let info = ClippingsInfo {
        books: library.len(),
        highlights: library.highlight_count(),
        titles: library
            .groups()
            .iter()
            .map(|g| TitleInfo {
                title: g.title.clone(),
                author: g.author.clone(),
                highlights: g.len(),
            })
            .collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("Books:       {}", info.books);
        println!("Highlights:  {}", info.highlights);
        for title in &info.titles {
            println!(
                "  {} by {} ({} highlights)",
                title.title, title.author, title.highlights
            );
        }
    }

    Ok(())
}
