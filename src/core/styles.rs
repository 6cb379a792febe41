//! Palette and named cell styles shared by both workbooks

use crate::types::{Alignment, BorderStyle, Font, HorizontalAlign, Rgb, Style, VerticalAlign};

pub const FONT_FAMILY: &str = "メイリオ";

pub const TITLE_FILL: Rgb = Rgb(0x366092);
pub const HEADING_FILL: Rgb = Rgb(0xD9E1F2);
pub const COMPLETED_FILL: Rgb = Rgb(0xC6EFCE);
pub const IN_PROGRESS_FILL: Rgb = Rgb(0xFFEB9C);
pub const NOT_STARTED_FILL: Rgb = Rgb(0xD9D9D9);
pub const BLOCKED_FILL: Rgb = Rgb(0xFFC7CE);
pub const ON_HOLD_FILL: Rgb = Rgb(0xF8CBAD);
pub const PLACEHOLDER_FILL: Rgb = Rgb(0xF2F2F2);
pub const PLACEHOLDER_TEXT: Rgb = Rgb(0x808080);
pub const SUCCESS_TEXT: Rgb = Rgb(0x006100);

pub const CENTER: Alignment = Alignment {
    horizontal: HorizontalAlign::Center,
    vertical: VerticalAlign::Center,
    wrap_text: true,
};

pub const LEFT_TOP: Alignment = Alignment {
    horizontal: HorizontalAlign::Left,
    vertical: VerticalAlign::Top,
    wrap_text: true,
};

pub fn font(size: f64) -> Font {
    Font::new(FONT_FAMILY, size)
}

/// White bold 16pt on the title blue, centered
pub fn title() -> Style {
    Style::new()
        .with_font(font(16.0).bold().color(Rgb::WHITE))
        .with_fill(TITLE_FILL)
        .with_alignment(CENTER)
}

/// Bold band on the heading blue
pub fn heading_band(size: f64) -> Style {
    Style::new()
        .with_font(font(size).bold())
        .with_fill(HEADING_FILL)
        .with_alignment(LEFT_TOP)
}

/// Table header cell
pub fn column_header() -> Style {
    Style::new()
        .with_font(font(12.0).bold())
        .with_fill(HEADING_FILL)
        .with_alignment(CENTER)
        .with_border(BorderStyle::Thin)
}

pub fn body(size: f64) -> Style {
    Style::new().with_font(font(size))
}

pub fn paragraph(size: f64) -> Style {
    body(size).with_alignment(LEFT_TOP)
}

/// Bordered table cell
pub fn table_cell(alignment: Alignment) -> Style {
    body(10.0)
        .with_alignment(alignment)
        .with_border(BorderStyle::Thin)
}

pub fn update_date() -> Style {
    body(9.0)
}

pub fn legend() -> Style {
    Style::new()
        .with_font(font(9.0).italic())
        .with_alignment(LEFT_TOP)
}

/// Gray italic box where a screenshot gets pasted
pub fn image_placeholder() -> Style {
    Style::new()
        .with_font(font(10.0).italic().color(PLACEHOLDER_TEXT))
        .with_fill(PLACEHOLDER_FILL)
        .with_alignment(CENTER)
}

pub fn completion_banner() -> Style {
    Style::new()
        .with_font(font(12.0).bold().color(SUCCESS_TEXT))
        .with_fill(COMPLETED_FILL)
        .with_alignment(CENTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_style() {
        let style = title();
        let font = style.font.unwrap();
        assert_eq!(font.name, FONT_FAMILY);
        assert_eq!(font.size, 16.0);
        assert!(font.bold);
        assert_eq!(font.color, Some(Rgb::WHITE));
        assert_eq!(style.fill, Some(TITLE_FILL));
    }

    #[test]
    fn test_placeholder_style() {
        let style = image_placeholder();
        let font = style.font.unwrap();
        assert!(font.italic);
        assert_eq!(font.color, Some(PLACEHOLDER_TEXT));
        assert_eq!(style.fill, Some(PLACEHOLDER_FILL));
        assert_eq!(style.alignment, Some(CENTER));
    }

    #[test]
    fn test_table_cell_has_border() {
        assert_eq!(table_cell(LEFT_TOP).border, Some(BorderStyle::Thin));
        assert!(body(10.0).border.is_none());
    }
}
