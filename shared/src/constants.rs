pub const TARGET_SLOT_COUNT: usize = 50; // Slots in one generated sequence
pub const SLOT_WIDTH_PX: f64 = 64.0; // w-16 squares
pub const STRIP_REPEATS: usize = 10; // Repeated sets rendered side by side

pub const MIN_ROTATIONS: f64 = 3.0;
pub const MAX_ROTATIONS: f64 = 5.0;

pub const BASE_SPIN_DURATION_MS: u32 = 5000;
pub const EXTRA_MS_PER_ROTATION: f64 = 2000.0;
pub const MAX_EXTRA_SPIN_MS: f64 = 8000.0;

pub const FALLBACK_VIEWPORT_WIDTH: f64 = 768.0; // max-w-3xl

pub const PRE_ROLL_DELAY_MS: u32 = 100; // Let the position reset apply first
pub const SETTLE_DELAY_MS: u32 = 500; // Pause before revealing the winner
