use super::projection::Point;
use super::MapView;
use crate::model::{Coordinate, Note};
use chrono::{DateTime, Utc};

/// Marker icon geometry, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerIcon {
    pub asset: &'static str,
    pub size: (u32, u32),
    /// Point of the icon that sits on the coordinate (the pin's tip).
    pub anchor: (i32, i32),
    /// Where the popup opens, relative to the anchor.
    pub popup_anchor: (i32, i32),
}

pub const MARKER_ICON: MarkerIcon = MarkerIcon {
    asset: "map-marker.png",
    size: (32, 32),
    anchor: (16, 32),
    popup_anchor: (0, -32),
};

#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub note_id: u32,
    pub coordinate: Coordinate,
    /// Viewport pixel of the coordinate.
    pub position: Point,
    /// Top-left corner of the icon image.
    pub icon_origin: Point,
    pub popup_at: Point,
    pub visible: bool,
    pub popup: Popup,
}

impl Marker {
    pub fn place(note: &Note, view: &MapView, icon: &MarkerIcon) -> Self {
        let position = view.position_of(note.coordinate);
        let icon_origin = Point::new(
            position.x - icon.anchor.0 as f64,
            position.y - icon.anchor.1 as f64,
        );
        let popup_at = Point::new(
            position.x + icon.popup_anchor.0 as f64,
            position.y + icon.popup_anchor.1 as f64,
        );
        // Visible when any part of the icon overlaps the viewport
        let visible = view.contains(position)
            || view.contains(icon_origin)
            || view.contains(Point::new(
                icon_origin.x + icon.size.0 as f64,
                icon_origin.y,
            ));

        Self {
            note_id: note.id,
            coordinate: note.coordinate,
            position,
            icon_origin,
            popup_at,
            visible,
            popup: Popup {
                text: note.text.clone(),
                created_at: note.created_at,
            },
        }
    }
}

/// One marker per note, in collection order.
pub fn marker_layer(notes: &[Note], view: &MapView) -> Vec<Marker> {
    notes
        .iter()
        .map(|note| Marker::place(note, view, &MARKER_ICON))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_at_center_is_anchored_by_its_tip() {
        let view = MapView::default();
        let note = Note::new(1, view.center(), "here".into());
        let marker = Marker::place(&note, &view, &MARKER_ICON);

        assert!((marker.position.x - 512.0).abs() < 1e-6);
        assert!((marker.position.y - 384.0).abs() < 1e-6);
        assert!((marker.icon_origin.x - 496.0).abs() < 1e-6);
        assert!((marker.icon_origin.y - 352.0).abs() < 1e-6);
        assert!((marker.popup_at.y - 352.0).abs() < 1e-6);
        assert!(marker.visible);
        assert_eq!(marker.popup.text, "here");
    }

    #[test]
    fn far_away_markers_are_not_visible() {
        let view = MapView::default();
        let note = Note::new(1, Coordinate::new(-40.0, -120.0), "far".into());
        assert!(!Marker::place(&note, &view, &MARKER_ICON).visible);
    }

    #[test]
    fn layer_follows_collection_order() {
        let view = MapView::default();
        let notes = vec![
            Note::new(1, Coordinate::new(30.0, 31.0), "a".into()),
            Note::new(2, Coordinate::new(25.0, 32.0), "b".into()),
        ];
        let layer = marker_layer(&notes, &view);
        let ids: Vec<_> = layer.iter().map(|m| m.note_id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
