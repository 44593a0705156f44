use glam::{Quat, Vec3};

/// Which local axis of the model is aligned with the direction of
/// travel while moving.
///
/// `None` leaves orientation untouched. The remaining modes name the
/// model's logical sides at rest: forward is `-Z`, so `Front` drives
/// the model nose-first, `Back` reverses it, `Left`/`Right` strafe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FacingMode {
    #[default]
    None,
    Front,
    Back,
    Left,
    Right,
}

impl FacingMode {
    /// The canonical local axis this mode aligns with the travel
    /// direction, or `None` for [`FacingMode::None`].
    #[must_use]
    pub fn local_axis(self) -> Option<Vec3> {
        match self {
            FacingMode::None => None,
            FacingMode::Front => Some(Vec3::NEG_Z),
            FacingMode::Back => Some(Vec3::Z),
            FacingMode::Left => Some(Vec3::NEG_X),
            FacingMode::Right => Some(Vec3::X),
        }
    }
}

// Below this, a travel direction carries no usable heading (coincident
// path points) and the previous orientation is kept.
const DEGENERATE_DIR_SQ: f32 = 1e-8;

/// The minimal rotation mapping the mode's canonical axis onto the
/// travel direction.
///
/// Returns `None` for [`FacingMode::None`] and for degenerate travel
/// directions; the caller skips the orientation write in both cases
/// rather than applying an undefined rotation.
#[must_use]
pub fn facing_rotation(mode: FacingMode, travel_dir: Vec3) -> Option<Quat> {
    let axis = mode.local_axis()?;
    if travel_dir.length_squared() < DEGENERATE_DIR_SQ {
        return None;
    }
    Some(Quat::from_rotation_arc(axis, travel_dir.normalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_mode_skips_rotation() {
        assert!(facing_rotation(FacingMode::None, Vec3::Z).is_none());
    }

    #[test]
    fn degenerate_direction_skips_rotation() {
        assert!(facing_rotation(FacingMode::Front, Vec3::ZERO).is_none());
    }

    #[test]
    fn front_maps_forward_axis_onto_direction() {
        let rot = facing_rotation(FacingMode::Front, Vec3::Z).unwrap();
        let rotated = rot * Vec3::NEG_Z;
        assert!(
            rotated.distance(Vec3::Z) < 1e-5,
            "forward axis should land on +Z, got {rotated}"
        );
    }

    #[test]
    fn each_mode_aligns_its_own_axis() {
        let dir = Vec3::new(1.0, 0.0, 1.0).normalize();
        for mode in [
            FacingMode::Front,
            FacingMode::Back,
            FacingMode::Left,
            FacingMode::Right,
        ] {
            let axis = mode.local_axis().unwrap();
            let rot = facing_rotation(mode, dir).unwrap();
            let rotated = rot * axis;
            assert!(
                rotated.distance(dir) < 1e-5,
                "{mode:?}: axis should land on travel dir, got {rotated}"
            );
        }
    }
}
