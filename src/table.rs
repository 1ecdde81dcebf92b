//! Terminal rendering of the periodic table and conversion details

use colored::{Color, ColoredString, Colorize};
use itertools::Itertools;
use spectone_core::{Catalog, Category, Conversion, Element, GROUPS};

/// The width of a table cell, including the space after it
const CELL_WIDTH: usize = 4;

/// Get the color used for a category of elements
pub fn category_color(category: Category) -> Color {
    match category {
        Category::AlkaliMetal => Color::Red,
        Category::AlkalineEarth => Color::Yellow,
        Category::TransitionMetal => Color::Magenta,
        Category::PostTransition => Color::Cyan,
        Category::Metalloid => Color::BrightGreen,
        Category::Nonmetal => Color::Green,
        Category::Halogen => Color::BrightYellow,
        Category::NobleGas => Color::Blue,
        Category::Uncategorized => Color::White,
    }
}

fn cell(elem: &Element, playing: bool) -> ColoredString {
    let text = format!("{:<width$}", elem.symbol, width = CELL_WIDTH - 1);
    let colored = text.color(category_color(elem.category()));
    if playing {
        colored.bold().reversed()
    } else {
        colored
    }
}

/// Render the periodic table
///
/// Elements are placed by group and period and colored by category.
/// The elements in `playing` are highlighted.
pub fn render_table(catalog: &Catalog, playing: &[&str]) -> String {
    let periods = catalog.iter().map(|elem| elem.period).max().unwrap_or(0);
    let header = (1..=GROUPS)
        .map(|group| format!("{:<width$}", group, width = CELL_WIDTH - 1))
        .join(" ");
    let mut lines = vec![format!("   {}", header).trim_end().to_string()];
    for period in 1..=periods {
        let row = (1..=GROUPS)
            .map(|group| match catalog.at(group, period) {
                Some(elem) => {
                    let is_playing = playing
                        .iter()
                        .any(|symbol| symbol.eq_ignore_ascii_case(&elem.symbol));
                    cell(elem, is_playing).to_string()
                }
                None => " ".repeat(CELL_WIDTH - 1),
            })
            .join(" ");
        lines.push(format!("{:<2} {}", period, row).trim_end().to_string());
    }
    lines.join("\n")
}

/// Render a legend of the element categories present in a catalog
pub fn render_legend(catalog: &Catalog) -> String {
    catalog
        .iter()
        .map(Element::category)
        .unique()
        .map(|category| category.name().color(category_color(category)).to_string())
        .join("  ")
}

/// Format a wavelength the way it was written in the catalog
fn format_wavelength(wavelength: f64) -> String {
    format!("{}", wavelength)
}

/// Render the conversion details of an element
pub fn info_panel(elem: &Element, conv: &Conversion) -> String {
    [
        format!("{} ({})", elem.name, elem.symbol),
        format!(
            "  Wavelength:      {} nm",
            format_wavelength(conv.original_wavelength)
        ),
        format!("  EM frequency:    {:.4} THz", conv.em_frequency / 1e12),
        format!("  Audio frequency: {:.2} Hz", conv.quantized_frequency),
        format!("  Note:            {}", conv.note),
    ]
    .join("\n")
}

/// Render the line listing an element in `list`
pub fn list_line(number: usize, elem: &Element) -> String {
    let detail = match elem.convert() {
        Ok(conv) => format!("{:>8.2} Hz  {}", conv.quantized_frequency, conv.note),
        Err(e) => e.to_string(),
    };
    format!(
        "{:>3} {:<3} {:<12} {:>8} nm  {}",
        number,
        elem.symbol,
        elem.name,
        format_wavelength(elem.wavelength),
        detail
    )
}
