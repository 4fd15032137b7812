/// Axis-aligned pixel rectangle with exclusive right/bottom edges.
///
/// Coordinates are signed so raw detector output can be represented before
/// clamping; a rect handed to the compositor is expected to be clamped first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// True for zero-area and inverted rects. Empty rects contribute
    /// neither a snapshot nor a write-back.
    pub fn is_empty(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }

    /// Clamps all four coordinates into `[0, frame_w] x [0, frame_h]`.
    ///
    /// An inverted rect stays inverted when both edges already lie inside
    /// the frame; callers detect that via [`Rect::is_empty`].
    pub fn clamp(&self, frame_w: u32, frame_h: u32) -> Rect {
        let w = frame_w as i32;
        let h = frame_h as i32;
        Rect {
            left: self.left.clamp(0, w),
            top: self.top.clamp(0, h),
            right: self.right.clamp(0, w),
            bottom: self.bottom.clamp(0, h),
        }
    }
}
