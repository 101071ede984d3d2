//! SVG microprints
//!
//! Rows become `<text>` elements set in a monospace font whose size equals
//! the scale; rows with a non-default background get a `<rect>` behind them.

use std::path::Path;

use image::Rgb;

use crate::error::{RenderError, Result};
use crate::layout::Layout;
use crate::rules::LineStyle;

/// Advance of a monospace glyph relative to its font size
const CHAR_WIDTH_EM: f64 = 0.6;

/// Baseline position within a row relative to the row height
const BASELINE_EM: f64 = 0.8;

/// Builds the SVG document for `layout`
pub fn render_svg(layout: &Layout, default_style: LineStyle, scale: u32) -> Result<String> {
    if scale == 0 {
        return Err(RenderError::InvalidScale(scale));
    }

    let scale = f64::from(scale);
    let width = layout.columns as f64 * scale * CHAR_WIDTH_EM;
    let height = layout.rows.len() as f64 * scale;

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"monospace\" font-size=\"{s}\">\n",
        w = number(width),
        h = number(height),
        s = number(scale),
    ));
    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
        rgb_to_hex(default_style.background)
    ));

    for (index, row) in layout.rows.iter().enumerate() {
        let top = index as f64 * scale;

        if row.style.background != default_style.background {
            svg.push_str(&format!(
                "<rect x=\"0\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
                number(top),
                number(width),
                number(scale),
                rgb_to_hex(row.style.background)
            ));
        }

        if row.text.trim().is_empty() {
            continue;
        }

        svg.push_str(&format!(
            "<text x=\"0\" y=\"{}\" fill=\"{}\" xml:space=\"preserve\">{}</text>\n",
            number(top + scale * BASELINE_EM),
            rgb_to_hex(row.style.text),
            escape_xml(&row.text)
        ));
    }

    svg.push_str("</svg>\n");
    Ok(svg)
}

/// Builds the SVG document for `layout` and writes it to `path`
pub fn render_svg_to_file(
    layout: &Layout,
    default_style: LineStyle,
    path: &Path,
    scale: u32,
) -> Result<()> {
    let svg = render_svg(layout, default_style, scale)?;
    std::fs::write(path, svg).map_err(|source| RenderError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Format an `Rgb` color as a `#RRGGBB` hex string.
fn rgb_to_hex(Rgb([r, g, b]): Rgb<u8>) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Attribute-friendly number: one decimal at most, no trailing `.0`
fn number(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    format!("{}", rounded)
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
