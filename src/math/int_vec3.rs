use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use super::{IntVec2, ParseVecError};

/// Integer grid coordinate. Ordering is lexicographic on `(x, y, z)` so the
/// type can key ordered containers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IntVec3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl IntVec3 {
    pub const ZERO: IntVec3 = IntVec3::new(0, 0, 0);
    pub const ONE: IntVec3 = IntVec3::new(1, 1, 1);
    pub const NEGATIVE_ONE: IntVec3 = IntVec3::new(-1, -1, -1);

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Each component truncated toward zero.
    pub fn truncating(x: f32, y: f32, z: f32) -> Self {
        Self::new(x as i32, y as i32, z as i32)
    }

    pub fn taxicab_distance(a: Self, b: Self) -> i32 {
        (b - a).taxicab_length()
    }

    pub fn distance(a: Self, b: Self) -> f32 {
        (b - a).length()
    }

    pub fn length(self) -> f32 {
        (self.length_squared() as f32).sqrt()
    }

    pub fn length_squared(self) -> i32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn taxicab_length(self) -> i32 {
        self.x.abs() + self.y.abs() + self.z.abs()
    }

    pub fn xy(self) -> IntVec2 {
        IntVec2::new(self.x, self.y)
    }

    /// Parse `"x,y,z"` into `self`. On error `self` is left untouched.
    pub fn set_from_text(&mut self, text: &str) -> Result<(), ParseVecError> {
        *self = text.parse()?;
        Ok(())
    }
}

impl FromStr for IntVec3 {
    type Err = ParseVecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 3 {
            return Err(ParseVecError::Arity {
                expected: 3,
                found: parts.len(),
            });
        }
        let component = |p: &str| {
            p.trim()
                .parse::<i32>()
                .map_err(|_| ParseVecError::Component(p.trim().to_string()))
        };
        Ok(Self::new(
            component(parts[0])?,
            component(parts[1])?,
            component(parts[2])?,
        ))
    }
}

impl Add for IntVec3 {
    type Output = IntVec3;
    fn add(self, rhs: IntVec3) -> IntVec3 {
        IntVec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for IntVec3 {
    type Output = IntVec3;
    fn sub(self, rhs: IntVec3) -> IntVec3 {
        IntVec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for IntVec3 {
    type Output = IntVec3;
    fn neg(self) -> IntVec3 {
        IntVec3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<i32> for IntVec3 {
    type Output = IntVec3;
    fn mul(self, s: i32) -> IntVec3 {
        IntVec3::new(self.x * s, self.y * s, self.z * s)
    }
}

impl AddAssign for IntVec3 {
    fn add_assign(&mut self, rhs: IntVec3) {
        *self = *self + rhs;
    }
}

impl SubAssign for IntVec3 {
    fn sub_assign(&mut self, rhs: IntVec3) {
        *self = *self - rhs;
    }
}

impl MulAssign<i32> for IntVec3 {
    fn mul_assign(&mut self, s: i32) {
        *self = *self * s;
    }
}
