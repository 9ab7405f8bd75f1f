//! Waypoint selection state.
//!
//! A [`WaypointSet`] keeps selections in insertion order so that undo removes
//! the most recent one. Each entry is either one clicked point or the whole
//! batch produced by one extrema detection run.

use log::debug;

use crate::Waypoint;

/// One undoable selection.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WaypointEntry {
    /// A single clicked point.
    Manual(Waypoint),
    /// Points added together by one extrema detection, in detection order.
    Batch(Vec<Waypoint>),
}

impl WaypointEntry {
    pub fn points(&self) -> &[Waypoint] {
        match self {
            Self::Manual(w) => std::slice::from_ref(w),
            Self::Batch(ws) => ws,
        }
    }
}

/// Ordered collection of selected waypoints.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaypointSet {
    entries: Vec<WaypointEntry>,
}

impl WaypointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a manual entry.
    pub fn add(&mut self, waypoint: Waypoint) {
        self.entries.push(WaypointEntry::Manual(waypoint));
    }

    /// Append one batch entry. An empty batch is kept but contributes no
    /// points; callers normally skip empty detections.
    pub fn add_batch(&mut self, waypoints: Vec<Waypoint>) {
        self.entries.push(WaypointEntry::Batch(waypoints));
    }

    /// Remove the first waypoint within `tolerance` of `x`, scanning entries
    /// in insertion order. Returns whether anything was removed.
    ///
    /// A matching manual entry is dropped whole. A match inside a batch drops
    /// only that point; the rest of the batch stays one entry (possibly empty)
    /// and moves to the most recent position, so the next undo removes it.
    pub fn toggle_near(&mut self, x: f64, tolerance: f64) -> bool {
        for idx in 0..self.entries.len() {
            match &mut self.entries[idx] {
                WaypointEntry::Manual(w) => {
                    if is_near(w, x, tolerance) {
                        debug!("[SlopeSense] Removed waypoint at {:.1}m", w.distance);
                        self.entries.remove(idx);
                        return true;
                    }
                }
                WaypointEntry::Batch(ws) => {
                    if let Some(pos) = ws.iter().position(|w| is_near(w, x, tolerance)) {
                        let removed = ws.remove(pos);
                        debug!(
                            "[SlopeSense] Removed batch waypoint at {:.1}m, {} left in batch",
                            removed.distance,
                            ws.len()
                        );
                        let entry = self.entries.remove(idx);
                        self.entries.push(entry);
                        return true;
                    }
                }
            }
        }

        false
    }

    /// Remove the most recent entry (manual or batch) and return it.
    pub fn undo_last(&mut self) -> Option<WaypointEntry> {
        self.entries.pop()
    }

    /// All points in entry order, batch points in detection order.
    pub fn flatten(&self) -> Vec<Waypoint> {
        self.entries
            .iter()
            .flat_map(|e| e.points().iter().copied())
            .collect()
    }

    pub fn entries(&self) -> &[WaypointEntry] {
        &self.entries
    }

    /// Number of entries (not points).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of points across all entries.
    pub fn point_count(&self) -> usize {
        self.entries.iter().map(|e| e.points().len()).sum()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

fn is_near(waypoint: &Waypoint, x: f64, tolerance: f64) -> bool {
    (waypoint.distance - x).abs() <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(distance: f64, elevation: f64) -> Waypoint {
        Waypoint::new(distance, elevation)
    }

    #[test]
    fn test_add_and_flatten_order() {
        let mut set = WaypointSet::new();
        set.add(w(300.0, 5.0));
        set.add_batch(vec![w(100.0, 1.0), w(200.0, 2.0)]);
        set.add(w(50.0, 0.5));

        assert_eq!(set.len(), 3);
        assert_eq!(set.point_count(), 4);
        assert_eq!(
            set.flatten(),
            vec![w(300.0, 5.0), w(100.0, 1.0), w(200.0, 2.0), w(50.0, 0.5)]
        );
    }

    #[test]
    fn test_undo_is_left_inverse_of_add() {
        let mut set = WaypointSet::new();
        set.add(w(10.0, 1.0));
        let before = set.flatten();

        set.add(w(20.0, 2.0));
        assert_eq!(set.undo_last(), Some(WaypointEntry::Manual(w(20.0, 2.0))));
        assert_eq!(set.flatten(), before);

        set.add_batch(vec![w(30.0, 3.0), w(40.0, 4.0)]);
        set.undo_last();
        assert_eq!(set.flatten(), before);
    }

    #[test]
    fn test_undo_on_empty_is_noop() {
        let mut set = WaypointSet::new();
        assert_eq!(set.undo_last(), None);
        assert!(set.is_empty());
    }

    #[test]
    fn test_toggle_on_empty() {
        let mut set = WaypointSet::new();
        assert!(!set.toggle_near(100.0, 50.0));
        assert!(set.is_empty());
    }

    #[test]
    fn test_toggle_cancels_add() {
        let mut set = WaypointSet::new();
        set.add(w(500.0, 9.0));
        let before = set.clone();

        set.add(w(120.0, 3.0));
        assert!(set.toggle_near(120.0, 0.0));
        assert_eq!(set, before);
    }

    #[test]
    fn test_toggle_respects_tolerance() {
        let mut set = WaypointSet::new();
        set.add(w(100.0, 1.0));
        assert!(!set.toggle_near(111.0, 10.0));
        assert!(set.toggle_near(110.0, 10.0));
        assert!(set.is_empty());
    }

    #[test]
    fn test_toggle_removes_only_first_match() {
        let mut set = WaypointSet::new();
        set.add(w(100.0, 1.0));
        set.add(w(102.0, 2.0));
        assert!(set.toggle_near(101.0, 5.0));
        assert_eq!(set.flatten(), vec![w(102.0, 2.0)]);
    }

    #[test]
    fn test_toggle_inside_batch_keeps_rest() {
        let mut set = WaypointSet::new();
        set.add_batch(vec![w(100.0, 1.0), w(200.0, 2.0), w(300.0, 3.0)]);
        set.add(w(400.0, 4.0));

        assert!(set.toggle_near(200.0, 1.0));
        assert_eq!(set.len(), 2);
        // Edited batch is now the most recent entry
        assert_eq!(
            set.entries(),
            &[
                WaypointEntry::Manual(w(400.0, 4.0)),
                WaypointEntry::Batch(vec![w(100.0, 1.0), w(300.0, 3.0)]),
            ]
        );

        set.undo_last();
        assert_eq!(set.flatten(), vec![w(400.0, 4.0)]);
    }

    #[test]
    fn test_emptied_batch_persists() {
        let mut set = WaypointSet::new();
        set.add_batch(vec![w(100.0, 1.0)]);
        assert!(set.toggle_near(100.0, 0.5));
        assert_eq!(set.len(), 1);
        assert_eq!(set.point_count(), 0);
        assert!(set.flatten().is_empty());
    }

    #[test]
    fn test_empty_batch_contributes_nothing() {
        let mut set = WaypointSet::new();
        set.add_batch(vec![]);
        set.add(w(5.0, 5.0));
        assert_eq!(set.flatten(), vec![w(5.0, 5.0)]);
        assert!(!set.toggle_near(1000.0, 1.0));
    }
}
