//! Derived Visual Parameters
//!
//! Card tilt, badge opacities, and next-card entrance values as pure
//! functions of the drag offset. No animation API coupling; hosts map these
//! onto whatever rendering they use.

use crate::gesture::Offset;

const MAX_ROTATION_DEG: f64 = 10.0;
const BADGE_FADE_START_PX: f64 = 10.0;
const NEXT_CARD_MIN_SCALE: f64 = 0.9;
const NEXT_CARD_LIFT_PX: f64 = 40.0;

/// Everything the top card needs to render one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardVisuals {
    pub translate_x: f64,
    pub translate_y: f64,
    pub rotation_deg: f64,
    pub like_opacity: f64,
    pub nope_opacity: f64,
}

impl CardVisuals {
    /// Frame values for a card dragged to `offset` on a card `width_px` wide.
    pub fn from_offset(offset: Offset, width_px: f64) -> Self {
        let half = (width_px / 2.0).max(1.0);
        let quarter = (width_px / 4.0).max(BADGE_FADE_START_PX + 1.0);
        let rotation_deg = (offset.x / half).clamp(-1.0, 1.0) * MAX_ROTATION_DEG;
        let ramp = quarter - BADGE_FADE_START_PX;
        let like_opacity = ((offset.x - BADGE_FADE_START_PX) / ramp).clamp(0.0, 1.0);
        let nope_opacity = ((-offset.x - BADGE_FADE_START_PX) / ramp).clamp(0.0, 1.0);
        Self {
            translate_x: offset.x,
            translate_y: offset.y,
            rotation_deg,
            like_opacity,
            nope_opacity,
        }
    }

    /// Resting pose while the detail overlay is open: lifted, no tilt.
    pub fn details_lift(lift_px: f64) -> Self {
        Self {
            translate_y: -lift_px,
            ..Self::default()
        }
    }
}

/// Next-card scale for an entrance `progress` in `[0, 1]`.
pub fn next_card_scale(progress: f64) -> f64 {
    NEXT_CARD_MIN_SCALE + (1.0 - NEXT_CARD_MIN_SCALE) * progress.clamp(0.0, 1.0)
}

/// Next-card vertical lift for an entrance `progress` in `[0, 1]`.
pub fn next_card_lift_px(progress: f64) -> f64 {
    NEXT_CARD_LIFT_PX * (1.0 - progress.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_follows_horizontal_offset() {
        let visuals = CardVisuals::from_offset(Offset::new(90.0, 0.0), 360.0);
        assert!((visuals.rotation_deg - 5.0).abs() < 1e-9);

        let left = CardVisuals::from_offset(Offset::new(-90.0, 0.0), 360.0);
        assert!((left.rotation_deg + 5.0).abs() < 1e-9);
    }

    #[test]
    fn rotation_clamps_at_max() {
        let visuals = CardVisuals::from_offset(Offset::new(1000.0, 0.0), 360.0);
        assert_eq!(visuals.rotation_deg, MAX_ROTATION_DEG);
    }

    #[test]
    fn badges_stay_hidden_at_origin() {
        let visuals = CardVisuals::from_offset(Offset::ORIGIN, 360.0);
        assert_eq!(visuals.like_opacity, 0.0);
        assert_eq!(visuals.nope_opacity, 0.0);
    }

    #[test]
    fn like_badge_saturates_at_quarter_width() {
        let visuals = CardVisuals::from_offset(Offset::new(90.0, 0.0), 360.0);
        assert_eq!(visuals.like_opacity, 1.0);
        assert_eq!(visuals.nope_opacity, 0.0);
    }

    #[test]
    fn nope_badge_mirrors_like() {
        let visuals = CardVisuals::from_offset(Offset::new(-50.0, 0.0), 360.0);
        assert!(visuals.nope_opacity > 0.0 && visuals.nope_opacity < 1.0);
        assert_eq!(visuals.like_opacity, 0.0);
    }

    #[test]
    fn next_card_entrance_interpolates() {
        assert_eq!(next_card_scale(0.0), 0.9);
        assert_eq!(next_card_scale(1.0), 1.0);
        assert_eq!(next_card_lift_px(0.0), 40.0);
        assert_eq!(next_card_lift_px(1.0), 0.0);
        // Out-of-range progress clamps.
        assert_eq!(next_card_scale(2.0), 1.0);
    }
}
