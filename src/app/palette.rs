use ratatui::style::Color;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

/// Fixed palette of sector color tokens. Assignment hashes the sector label,
/// so the same label always gets the same token regardless of grouping order
/// or process restarts. Two sectors may share a color.
#[derive(Clone, Copy, Debug, Eq, PartialEq, EnumCountMacro, EnumIter)]
pub enum SectorColor {
    Blue,
    Purple,
    Green,
    Orange,
    Pink,
    Indigo,
    Teal,
    Cyan,
    Red,
    Amber,
}

impl SectorColor {
    pub fn for_label(label: &str) -> Self {
        let hash: usize = label.chars().map(|c| c as usize).sum();

        SectorColor::iter()
            .nth(hash % SectorColor::COUNT)
            .unwrap_or(SectorColor::Blue)
    }

    pub fn color(&self) -> Color {
        match self {
            SectorColor::Blue => Color::Rgb(37, 99, 235),
            SectorColor::Purple => Color::Rgb(147, 51, 234),
            SectorColor::Green => Color::Rgb(22, 163, 74),
            SectorColor::Orange => Color::Rgb(234, 88, 12),
            SectorColor::Pink => Color::Rgb(219, 39, 119),
            SectorColor::Indigo => Color::Rgb(79, 70, 229),
            SectorColor::Teal => Color::Rgb(13, 148, 136),
            SectorColor::Cyan => Color::Rgb(8, 145, 178),
            SectorColor::Red => Color::Rgb(220, 38, 38),
            SectorColor::Amber => Color::Rgb(217, 119, 6),
        }
    }
}
