use std::io::Write;

use crate::core::feed::types::SourceFeed;

pub const DEFAULT_WIDTH: usize = 80;
const MIN_TEXT_WIDTH: usize = 20;
const ITEM_INDENT: &str = "    ";

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("json encode failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("description could not be rendered: {0}")]
    Html(#[from] html2text::Error),
}

/// Prints every source feed as a host heading followed by its items.
///
/// Descriptions arrive as HTML and are flattened to wrapped plain text.
pub fn render_text<W: Write>(
    feeds: &[SourceFeed],
    width: usize,
    out: &mut W,
) -> Result<(), RenderError> {
    if feeds.is_empty() {
        writeln!(out, "No feeds available.")?;
        return Ok(());
    }

    let text_width = width.saturating_sub(ITEM_INDENT.len()).max(MIN_TEXT_WIDTH);
    for (index, feed) in feeds.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{} ({} items)", feed.host, feed.items.len())?;
        for item in &feed.items {
            writeln!(out, "  {}", item.title.trim())?;
            writeln!(out, "{ITEM_INDENT}{}", item.link.trim())?;
            let description = description_text(&item.description, text_width)?;
            for line in description.lines().filter(|line| !line.trim().is_empty()) {
                writeln!(out, "{ITEM_INDENT}{}", line.trim_end())?;
            }
        }
    }
    Ok(())
}

/// Writes the feeds back out using the wire field names.
pub fn render_json<W: Write>(feeds: &[SourceFeed], out: &mut W) -> Result<(), RenderError> {
    serde_json::to_writer_pretty(&mut *out, feeds)?;
    writeln!(out)?;
    Ok(())
}

fn description_text(html: &str, width: usize) -> Result<String, RenderError> {
    if html.trim().is_empty() {
        return Ok(String::new());
    }
    let text = html2text::config::plain().string_from_read(html.as_bytes(), width)?;
    Ok(text)
}
