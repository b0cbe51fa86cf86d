use std::ops::{Add, Mul, Sub};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntVec2 {
    pub x: i32,
    pub y: i32,
}

impl IntVec2 {
    pub const ZERO: IntVec2 = IntVec2 { x: 0, y: 0 };
    pub const ONE: IntVec2 = IntVec2 { x: 1, y: 1 };
    pub const NEGATIVE_ONE: IntVec2 = IntVec2 { x: -1, y: -1 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn length_squared(self) -> i32 {
        self.x * self.x + self.y * self.y
    }

    /// Manhattan length, `|x| + |y|`.
    pub fn taxicab_length(self) -> i32 {
        self.x.abs() + self.y.abs()
    }

    pub fn rotated_90(self) -> Self {
        Self::new(-self.y, self.x)
    }

    pub fn rotated_minus_90(self) -> Self {
        Self::new(self.y, -self.x)
    }
}

impl Add for IntVec2 {
    type Output = IntVec2;
    fn add(self, rhs: IntVec2) -> IntVec2 {
        IntVec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for IntVec2 {
    type Output = IntVec2;
    fn sub(self, rhs: IntVec2) -> IntVec2 {
        IntVec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i32> for IntVec2 {
    type Output = IntVec2;
    fn mul(self, s: i32) -> IntVec2 {
        IntVec2::new(self.x * s, self.y * s)
    }
}
