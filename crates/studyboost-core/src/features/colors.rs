//! Deterministic subject coloring.
//!
//! Each subject lacking a color gets `palette[index mod len]`. The
//! assignment is written back through the host's own save path, so it is
//! stable across reloads and across any number of reconciliation passes:
//! a subject that already carries a color is never repainted differently.

use crate::host::HostContext;
use crate::surface::Surface;

/// Assign missing colors and paint every row's indicator and bar fill.
/// Returns how many subjects received a new color.
pub fn enable<H: HostContext>(host: &mut H, surface: &mut Surface, palette: &[String]) -> usize {
    if palette.is_empty() {
        return 0;
    }
    let mut subjects = host.subjects();
    let mut assigned = 0;
    for (idx, subject) in subjects.iter_mut().enumerate() {
        if subject.color.is_none() {
            subject.color = Some(palette[idx % palette.len()].clone());
            assigned += 1;
        }
    }
    if assigned > 0 {
        host.save_subjects(&subjects);
    }
    for (row, subject) in surface.rows.iter_mut().zip(&subjects) {
        row.indicator = subject.color.clone();
        row.bar.fill = subject.color.clone();
    }
    assigned
}

/// Repaint every indicator and bar fill back to the neutral color.
pub fn disable(surface: &mut Surface) {
    for row in &mut surface.rows {
        row.indicator = None;
        row.bar.fill = None;
    }
}
