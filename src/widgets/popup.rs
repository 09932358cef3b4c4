use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Area directly below `anchor`, as wide as the anchor and clamped to `bounds`
pub fn popup_below_anchor(anchor: Rect, height: u16, bounds: Rect) -> Rect {
    let popup_y = anchor.y.saturating_add(anchor.height);
    let bottom = bounds.y.saturating_add(bounds.height);
    let available = bottom.saturating_sub(popup_y);

    Rect {
        x: anchor.x,
        y: popup_y.min(bottom),
        width: anchor.width,
        height: height.min(available),
    }
}

/// Area of the given size centered horizontally at `top` within `frame_area`
pub fn top_centered(frame_area: Rect, width: u16, height: u16, top: u16) -> Rect {
    let popup_width = width.min(frame_area.width);
    let popup_y = frame_area.y.saturating_add(top);
    let popup_height = height.min(
        frame_area
            .y
            .saturating_add(frame_area.height)
            .saturating_sub(popup_y),
    );

    Rect {
        x: frame_area.x + (frame_area.width.saturating_sub(popup_width)) / 2,
        y: popup_y,
        width: popup_width,
        height: popup_height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_below_anchor_basic() {
        let anchor = Rect::new(10, 4, 60, 3);
        let bounds = Rect::new(0, 0, 80, 24);

        let popup = popup_below_anchor(anchor, 10, bounds);

        assert_eq!(popup, Rect::new(10, 7, 60, 10));
    }

    #[test]
    fn test_popup_below_anchor_clamped_to_bounds() {
        let anchor = Rect::new(0, 18, 80, 3);
        let bounds = Rect::new(0, 0, 80, 24);

        let popup = popup_below_anchor(anchor, 10, bounds);

        assert_eq!(popup.y, 21);
        assert_eq!(popup.height, 3);
    }

    #[test]
    fn test_popup_below_anchor_no_room() {
        let anchor = Rect::new(0, 21, 80, 3);
        let bounds = Rect::new(0, 0, 80, 24);

        let popup = popup_below_anchor(anchor, 10, bounds);

        assert_eq!(popup.height, 0);
    }

    #[test]
    fn test_top_centered_basic() {
        let popup = top_centered(Rect::new(0, 0, 100, 30), 40, 3, 1);
        assert_eq!(popup, Rect::new(30, 1, 40, 3));
    }

    #[test]
    fn test_top_centered_too_wide_is_clamped() {
        let popup = top_centered(Rect::new(0, 0, 20, 10), 50, 3, 0);
        assert_eq!(popup.x, 0);
        assert_eq!(popup.width, 20);
    }

    #[test]
    fn test_top_centered_too_low_is_clamped() {
        let popup = top_centered(Rect::new(0, 0, 40, 4), 10, 3, 2);
        assert_eq!(popup.height, 2);
    }
}
