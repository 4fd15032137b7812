/// Detection records at or below this confidence are discarded.
pub const CONFIDENCE_THRESHOLD: f32 = 0.5;

/// Gaussian kernel extent used for background blurring (a 75x75 neighborhood).
pub const BLUR_KERNEL_SIZE: usize = 75;
