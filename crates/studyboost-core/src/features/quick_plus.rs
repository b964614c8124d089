//! "+1 completed" quick-increment control.

use chrono::Utc;

use crate::events::AddonEvent;
use crate::host::HostContext;
use crate::surface::Surface;

/// Attach the control to every row lacking one.
pub fn enable(surface: &mut Surface) {
    for row in &mut surface.rows {
        row.quick_plus = true;
    }
}

/// Remove all such controls.
pub fn disable(surface: &mut Surface) {
    for row in &mut surface.rows {
        row.quick_plus = false;
    }
}

/// Handle a click on one row's control: increment the subject's completed
/// count by one, clamped to its chapter count, then persist through the
/// host's save path and refresh derived stats.
pub fn click<H: HostContext>(host: &mut H, index: usize) -> Option<AddonEvent> {
    let mut subjects = host.subjects();
    let completed = {
        let subject = subjects.get_mut(index)?;
        subject.completed = subject.completed.saturating_add(1).min(subject.chapters);
        subject.completed
    };
    host.save_subjects(&subjects);
    host.refresh_stats();
    Some(AddonEvent::QuickIncrement {
        subject_index: index,
        completed,
        at: Utc::now(),
    })
}
