//! Grid snapping

use bevy::math::{Vec2, Vec3};

/// Cell dimensions at or below this size disable snapping
pub const MIN_CELL_SIZE: f32 = 0.05;

/// Grid lattice used for snapping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSettings {
    /// Cell width (x) and depth (z)
    pub cell_size: Vec2,
    /// Round to the nearest lattice point instead of the enclosing cell's center
    pub center_snap: bool,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            cell_size: Vec2::ONE,
            center_snap: false,
        }
    }
}

impl GridSettings {
    pub fn new(cell_width: f32, cell_depth: f32, center_snap: bool) -> Self {
        Self {
            cell_size: Vec2::new(cell_width, cell_depth),
            center_snap,
        }
    }

    /// Whether the cell size is large enough for snapping to apply
    pub fn snapping_enabled(&self) -> bool {
        self.cell_size.x > MIN_CELL_SIZE && self.cell_size.y > MIN_CELL_SIZE
    }

    pub fn snap(&self, point: Vec3) -> Vec3 {
        snap_to_grid(point, self)
    }
}

/// Snap a world point onto the grid lattice anchored at the origin.
///
/// The result always lies on the ground plane. With center-snap off the
/// point lands in the middle of the cell containing it; with center-snap on
/// it is rounded to the nearest lattice point.
pub fn snap_to_grid(point: Vec3, settings: &GridSettings) -> Vec3 {
    if !settings.snapping_enabled() {
        return Vec3::new(point.x, 0.0, point.z);
    }

    let cell = settings.cell_size;
    let axis = |value: f32, size: f32| {
        if settings.center_snap {
            ((value + size / 2.0) / size).floor() * size
        } else {
            (value / size).floor() * size + size / 2.0
        }
    };

    Vec3::new(axis(point.x, cell.x), 0.0, axis(point.z, cell.y))
}

/// Optional lower bounds on where tiles may be created
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PlacementBounds {
    pub min_x: Option<f32>,
    pub min_z: Option<f32>,
}

impl PlacementBounds {
    pub fn contains(&self, point: Vec3) -> bool {
        self.min_x.is_none_or(|min| point.x >= min) && self.min_z.is_none_or(|min| point.z >= min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points() -> Vec<Vec3> {
        vec![
            Vec3::new(0.3, 4.0, 0.7),
            Vec3::new(-0.3, 0.0, -2.6),
            Vec3::new(12.25, -1.0, 7.5),
            Vec3::new(-7.9, 2.0, 3.1),
            Vec3::ZERO,
        ]
    }

    #[test]
    fn corner_mode_lands_on_cell_center() {
        let settings = GridSettings::new(1.0, 1.0, false);
        assert_eq!(snap_to_grid(Vec3::new(0.3, 5.0, 0.7), &settings), Vec3::new(0.5, 0.0, 0.5));
        assert_eq!(snap_to_grid(Vec3::new(-0.3, 0.0, 1.2), &settings), Vec3::new(-0.5, 0.0, 1.5));
    }

    #[test]
    fn center_snap_rounds_to_nearest_lattice_point() {
        let settings = GridSettings::new(1.0, 1.0, true);
        assert_eq!(snap_to_grid(Vec3::new(0.3, 5.0, 0.7), &settings), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn width_and_depth_are_independent() {
        let settings = GridSettings::new(2.0, 0.5, true);
        assert_eq!(snap_to_grid(Vec3::new(2.9, 0.0, 0.3), &settings), Vec3::new(2.0, 0.0, 0.5));
    }

    #[test]
    fn snapping_is_idempotent() {
        for center_snap in [false, true] {
            for cell in [Vec2::ONE, Vec2::new(0.5, 2.0), Vec2::new(0.25, 0.25)] {
                let settings = GridSettings {
                    cell_size: cell,
                    center_snap,
                };
                for point in points() {
                    let once = snap_to_grid(point, &settings);
                    let twice = snap_to_grid(once, &settings);
                    assert_eq!(once, twice, "snap not idempotent for {point:?} with {settings:?}");
                }
            }
        }
    }

    #[test]
    fn tiny_cells_disable_snapping() {
        for cell in [Vec2::new(0.05, 1.0), Vec2::new(1.0, 0.01), Vec2::ZERO, Vec2::new(-1.0, 1.0)] {
            let settings = GridSettings {
                cell_size: cell,
                center_snap: false,
            };
            for point in points() {
                assert_eq!(snap_to_grid(point, &settings), Vec3::new(point.x, 0.0, point.z));
            }
        }
    }

    #[test]
    fn bounds_reject_points_below_minimum() {
        let bounds = PlacementBounds {
            min_x: Some(0.0),
            min_z: None,
        };
        assert!(bounds.contains(Vec3::new(0.5, 0.0, -10.0)));
        assert!(!bounds.contains(Vec3::new(-0.5, 0.0, 10.0)));
        assert!(PlacementBounds::default().contains(Vec3::splat(-100.0)));
    }
}
