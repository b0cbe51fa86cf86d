use std::mem::size_of;

use super::{Group, acknowledge, bracketed, graded, non_graded, report_timings, time_per_op};
use crate::math::{Aabb2, Vec2, approx_box, approx_vec2};
use crate::runner::Session;

pub fn group() -> Group {
    Group {
        name: "AABB2",
        sets: vec![
            graded("AABB2 - Constructors", constructors),
            graded("AABB2 - Static Constants", static_constants),
            graded("AABB2 - Accessor Methods", accessors),
            graded("AABB2 - Mutator Methods", mutators),
            graded("AABB2 - Operators", operators),
            graded("AABB2 - Unimplemented Methods", unimplemented),
            non_graded("AABB2 - Performance Tests", performance),
        ],
    }
}

fn constructors(t: &mut Session) -> usize {
    bracketed(t, "AABB2_Constructors", |t| {
        let empty = Aabb2::default();
        t.verify(
            approx_box(&empty, 0.0, 0.0, 0.0, 0.0),
            "AABB2 default should be (0,0,0,0)",
        );

        let b = Aabb2::new(1.0, 2.0, 5.0, 8.0);
        t.verify(approx_box(&b, 1.0, 2.0, 5.0, 8.0), "AABB2 constructor from 4 floats failed");

        let corners = Aabb2::from_corners(Vec2::new(2.3, 4.5), Vec2::new(6.7, 8.9));
        t.verify(
            approx_box(&corners, 2.3, 4.5, 6.7, 8.9),
            "AABB2 constructor from Vec2 corners failed",
        );

        t.verify(size_of::<Aabb2>() == 16, "size_of::<Aabb2>() should be 16 bytes (2 Vec2s)");
    });
    4
}

fn static_constants(t: &mut Session) -> usize {
    bracketed(t, "AABB2_StaticConstants", |t| {
        t.verify(
            approx_box(&Aabb2::ZERO_TO_ONE, 0.0, 0.0, 1.0, 1.0),
            "AABB2::ZERO_TO_ONE should span (0,0) to (1,1)",
        );
    });
    1
}

fn accessors(t: &mut Session) -> usize {
    bracketed(t, "AABB2_AccessorMethods", |t| {
        let b = Aabb2::new(10.0, 20.0, 50.0, 80.0);

        t.verify(
            b.is_point_inside(Vec2::new(30.0, 50.0)),
            "is_point_inside should be true for a point inside the box",
        );
        t.verify(
            !b.is_point_inside(Vec2::new(60.0, 50.0)),
            "is_point_inside should be false for a point outside the box",
        );
        t.verify(
            b.is_point_inside(Vec2::new(10.0, 20.0)),
            "is_point_inside should include the min corner",
        );
        t.verify(
            b.is_point_inside(Vec2::new(50.0, 80.0)),
            "is_point_inside should include the max corner",
        );

        t.verify(approx_vec2(b.center(), 30.0, 50.0), "center should be (30,50)");
        t.verify(approx_vec2(b.dimensions(), 40.0, 60.0), "dimensions should be (40,60)");

        t.verify(
            approx_vec2(b.nearest_point(Vec2::new(70.0, 50.0)), 50.0, 50.0),
            "nearest_point should clamp to the east edge",
        );
        t.verify(
            approx_vec2(b.nearest_point(Vec2::new(0.0, 50.0)), 10.0, 50.0),
            "nearest_point should clamp to the west edge",
        );

        t.verify(
            approx_vec2(b.point_at_uv(Vec2::new(0.25, 0.75)), 20.0, 65.0),
            "point_at_uv(0.25,0.75) should be (20,65)",
        );
        t.verify(
            approx_vec2(b.uv_for_point(Vec2::new(20.0, 65.0)), 0.25, 0.75),
            "uv_for_point(20,65) should be (0.25,0.75)",
        );
    });
    10
}

fn mutators(t: &mut Session) -> usize {
    bracketed(t, "AABB2_MutatorMethods", |t| {
        let mut moved = Aabb2::new(10.0, 20.0, 30.0, 40.0);
        moved.translate(Vec2::new(5.0, 10.0));
        t.verify(
            approx_box(&moved, 15.0, 30.0, 35.0, 50.0),
            "translate by (5,10) failed",
        );

        let mut recentered = Aabb2::new(10.0, 20.0, 30.0, 40.0);
        recentered.set_center(Vec2::new(100.0, 200.0));
        t.verify(
            approx_box(&recentered, 90.0, 190.0, 110.0, 210.0),
            "set_center should keep dimensions",
        );

        recentered.set_dimensions(Vec2::new(50.0, 80.0));
        t.verify(
            approx_box(&recentered, 75.0, 160.0, 125.0, 240.0),
            "set_dimensions should keep the center",
        );

        let mut stretched = Aabb2::new(10.0, 20.0, 30.0, 40.0);
        stretched.stretch_to_include_point(Vec2::new(50.0, 30.0));
        t.verify(
            approx_box(&stretched, 10.0, 20.0, 50.0, 40.0),
            "stretch east failed",
        );
        stretched.stretch_to_include_point(Vec2::new(5.0, 25.0));
        t.verify(
            approx_box(&stretched, 5.0, 20.0, 50.0, 40.0),
            "stretch west failed",
        );
    });
    5
}

fn operators(t: &mut Session) -> usize {
    bracketed(t, "AABB2_Operators", |t| {
        let a = Aabb2::new(1.0, 2.0, 3.0, 4.0);
        t.verify(a == Aabb2::new(1.0, 2.0, 3.0, 4.0), "== should hold for identical boxes");
        t.verify(a != Aabb2::new(1.0, 2.0, 3.0, 5.0), "== should fail for different boxes");
        t.verify(
            a != Aabb2::new(1.0001, 2.0, 3.0, 4.0),
            "== should be exact, not approximate",
        );
    });
    3
}

fn unimplemented(t: &mut Session) -> usize {
    acknowledge(t, "AABB2_UnimplementedMethods", "sub-box at UVs, clamping, text parsing")
}

fn performance(t: &mut Session) -> usize {
    bracketed(t, "AABB2_Performance_Comprehensive", |t| {
        let b = Aabb2::new(10.0, 20.0, 50.0, 80.0);
        let timings = [
            (
                "is_point_inside()",
                time_per_op(|i| b.is_point_inside(Vec2::new((i % 64) as f32, 40.0))),
            ),
            (
                "nearest_point()",
                time_per_op(|i| b.nearest_point(Vec2::new((i % 64) as f32, 0.0))),
            ),
            ("center()", time_per_op(|_| b.center())),
        ];
        let completed = report_timings(t, &timings);
        t.verify(completed, "AABB2 performance tests completed");
    });
    1
}
