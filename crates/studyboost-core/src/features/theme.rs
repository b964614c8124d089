//! Alternate light palette on the document root.

use crate::surface::{Surface, Theme};

pub fn enable(surface: &mut Surface) {
    surface.theme = Theme::Light;
}

pub fn disable(surface: &mut Surface) {
    surface.theme = Theme::Dark;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_root_theme() {
        let mut surface = Surface::default();
        enable(&mut surface);
        assert_eq!(surface.theme, Theme::Light);
        enable(&mut surface);
        assert_eq!(surface.theme, Theme::Light);
        disable(&mut surface);
        assert_eq!(surface.theme, Theme::Dark);
    }
}
