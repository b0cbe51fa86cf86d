use super::Vec2;

/// Axis-aligned box with inclusive bounds.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Aabb2 {
    pub mins: Vec2,
    pub maxs: Vec2,
}

impl Aabb2 {
    pub const ZERO_TO_ONE: Aabb2 = Aabb2 {
        mins: Vec2::ZERO,
        maxs: Vec2::ONE,
    };

    pub const fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            mins: Vec2::new(min_x, min_y),
            maxs: Vec2::new(max_x, max_y),
        }
    }

    pub fn from_corners(mins: Vec2, maxs: Vec2) -> Self {
        Self { mins, maxs }
    }

    pub fn is_point_inside(&self, p: Vec2) -> bool {
        p.x >= self.mins.x && p.x <= self.maxs.x && p.y >= self.mins.y && p.y <= self.maxs.y
    }

    pub fn center(&self) -> Vec2 {
        (self.mins + self.maxs) * 0.5
    }

    pub fn dimensions(&self) -> Vec2 {
        self.maxs - self.mins
    }

    pub fn nearest_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.mins.x, self.maxs.x),
            p.y.clamp(self.mins.y, self.maxs.y),
        )
    }

    pub fn point_at_uv(&self, uv: Vec2) -> Vec2 {
        let dims = self.dimensions();
        Vec2::new(self.mins.x + uv.x * dims.x, self.mins.y + uv.y * dims.y)
    }

    pub fn uv_for_point(&self, p: Vec2) -> Vec2 {
        let dims = self.dimensions();
        Vec2::new((p.x - self.mins.x) / dims.x, (p.y - self.mins.y) / dims.y)
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.mins += delta;
        self.maxs += delta;
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.translate(center - self.center());
    }

    pub fn set_dimensions(&mut self, dims: Vec2) {
        let center = self.center();
        let half = dims * 0.5;
        self.mins = center - half;
        self.maxs = center + half;
    }

    pub fn stretch_to_include_point(&mut self, p: Vec2) {
        self.mins.x = self.mins.x.min(p.x);
        self.mins.y = self.mins.y.min(p.y);
        self.maxs.x = self.maxs.x.max(p.x);
        self.maxs.y = self.maxs.y.max(p.y);
    }
}
