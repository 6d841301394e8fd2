//! Sky color keyframes
//!
//! Named time-of-day anchors with target zenith/mid/horizon colors. The
//! clock interpolates between the two keyframes bracketing the current
//! hour; the table wraps from late-dusk back to deep-night.

use crate::math::Color;

/// Zenith/mid/horizon gradient for one sky state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyColors {
    pub zenith: Color,
    pub mid: Color,
    pub horizon: Color,
}

impl SkyColors {
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            zenith: self.zenith.lerp(&other.zenith, t),
            mid: self.mid.lerp(&other.mid, t),
            horizon: self.horizon.lerp(&other.horizon, t),
        }
    }
}

/// A named time anchor with its target sky gradient
#[derive(Debug, Clone, Copy)]
pub struct SkyKeyframe {
    pub name: &'static str,
    pub hour: f32,
    pub colors: SkyColors,
}

const fn kf(
    name: &'static str,
    hour: f32,
    zenith: (u8, u8, u8),
    mid: (u8, u8, u8),
    horizon: (u8, u8, u8),
) -> SkyKeyframe {
    SkyKeyframe {
        name,
        hour,
        colors: SkyColors {
            zenith: Color::rgb8(zenith.0, zenith.1, zenith.2),
            mid: Color::rgb8(mid.0, mid.1, mid.2),
            horizon: Color::rgb8(horizon.0, horizon.1, horizon.2),
        },
    }
}

/// The full day cycle, sorted by hour. Must stay sorted: `bracketing` does
/// a linear scan relying on it.
pub static KEYFRAMES: [SkyKeyframe; 11] = [
    kf("deep-night", 0.0, (4, 6, 22), (10, 12, 36), (24, 26, 54)),
    kf("pre-dawn", 4.5, (10, 12, 40), (28, 26, 62), (66, 48, 86)),
    kf("dawn-twilight", 5.5, (24, 28, 72), (86, 60, 110), (176, 106, 122)),
    kf("sunrise", 6.0, (58, 86, 150), (158, 126, 150), (244, 168, 112)),
    kf("morning", 9.0, (92, 158, 222), (148, 196, 236), (210, 228, 242)),
    kf("midday", 12.0, (62, 142, 230), (130, 190, 240), (196, 226, 245)),
    kf("afternoon", 15.0, (80, 150, 222), (142, 192, 234), (206, 222, 238)),
    kf("golden-hour", 17.0, (108, 132, 196), (214, 160, 122), (248, 196, 112)),
    kf("sunset", 18.0, (72, 74, 142), (196, 110, 110), (246, 142, 84)),
    kf("dusk", 19.0, (28, 30, 84), (78, 56, 112), (152, 82, 104)),
    kf("late-dusk", 21.0, (10, 12, 38), (22, 20, 52), (44, 36, 72)),
];

/// Find the keyframes bracketing `hour` and the normalized position between
/// them. Hours past the last keyframe wrap around to deep-night at 24.
pub fn bracketing(hour: f32) -> (&'static SkyKeyframe, &'static SkyKeyframe, f32) {
    let hour = hour.rem_euclid(24.0);
    let last = &KEYFRAMES[KEYFRAMES.len() - 1];

    if hour < KEYFRAMES[0].hour || hour >= last.hour {
        // Wrap segment: late-dusk -> deep-night (next day)
        let span = 24.0 - last.hour + KEYFRAMES[0].hour;
        let offset = if hour >= last.hour {
            hour - last.hour
        } else {
            hour + 24.0 - last.hour
        };
        return (last, &KEYFRAMES[0], offset / span);
    }

    for pair in KEYFRAMES.windows(2) {
        if hour >= pair[0].hour && hour < pair[1].hour {
            let t = (hour - pair[0].hour) / (pair[1].hour - pair[0].hour);
            return (&pair[0], &pair[1], t);
        }
    }

    // Unreachable given the range checks above, but never panic in the
    // render path
    (&KEYFRAMES[0], &KEYFRAMES[0], 0.0)
}
