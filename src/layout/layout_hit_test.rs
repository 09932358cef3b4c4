//! Hit testing for layout regions

use ratatui::layout::Rect;

use super::layout_regions::{LayoutRegions, Region};

fn contains(rect: &Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

/// Returns the topmost region containing the given point
///
/// Toasts are drawn last, then the dropdown over the hint line, so they are
/// checked in that order. Returns `None` outside all tracked regions.
pub fn region_at(regions: &LayoutRegions, x: u16, y: u16) -> Option<Region> {
    if let Some((id, _)) = regions
        .toasts
        .iter()
        .rev()
        .find(|(_, rect)| contains(rect, x, y))
    {
        return Some(Region::Toast(*id));
    }

    if let Some(rect) = &regions.dropdown
        && contains(rect, x, y)
    {
        return Some(Region::Dropdown);
    }

    if let Some(rect) = &regions.input_field
        && contains(rect, x, y)
    {
        return Some(Region::InputField);
    }

    if let Some(rect) = &regions.hint
        && contains(rect, x, y)
    {
        return Some(Region::Hint);
    }

    None
}
