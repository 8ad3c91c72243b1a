//! Player animation color ramps and frame labels

use image::Rgba;

const IDLE_RAMP: [Rgba<u8>; 4] = [
    Rgba([100, 150, 255, 255]), // Light blue
    Rgba([80, 130, 235, 255]),  // Medium blue
    Rgba([60, 110, 215, 255]),  // Darker blue
    Rgba([80, 130, 235, 255]),
];

const WALK_RAMP: [Rgba<u8>; 8] = [
    Rgba([100, 200, 100, 255]), // Green
    Rgba([90, 190, 90, 255]),
    Rgba([80, 180, 80, 255]),
    Rgba([70, 170, 70, 255]),
    Rgba([80, 180, 80, 255]),
    Rgba([90, 190, 90, 255]),
    Rgba([100, 200, 100, 255]),
    Rgba([90, 190, 90, 255]),
];

const JUMP_RAMP: [Rgba<u8>; 2] = [
    Rgba([255, 150, 50, 255]), // Orange (rising)
    Rgba([255, 100, 0, 255]),  // Dark orange (falling)
];

const JUMP_LABELS: [&str; 2] = ["\u{2191}", "\u{2193}"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    Idle,
    Walk,
    Jump,
}

impl Animation {
    pub const ALL: [Animation; 3] = [Animation::Idle, Animation::Walk, Animation::Jump];

    pub fn name(self) -> &'static str {
        match self {
            Animation::Idle => "idle",
            Animation::Walk => "walk",
            Animation::Jump => "jump",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.png", self.name())
    }

    fn ramp(self) -> &'static [Rgba<u8>] {
        match self {
            Animation::Idle => &IDLE_RAMP,
            Animation::Walk => &WALK_RAMP,
            Animation::Jump => &JUMP_RAMP,
        }
    }

    pub fn frame_count(self) -> usize {
        self.ramp().len()
    }

    /// Frame indices wrap around the ramp
    pub fn frame_color(self, frame: usize) -> Rgba<u8> {
        let ramp = self.ramp();
        ramp[frame % ramp.len()]
    }

    pub fn frame_label(self, frame: usize) -> String {
        let frame = frame % self.frame_count();
        match self {
            Animation::Idle => format!("I{}", frame),
            Animation::Walk => format!("W{}", frame),
            Animation::Jump => JUMP_LABELS[frame].to_string(),
        }
    }
}
