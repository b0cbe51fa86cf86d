use std::mem::size_of;

use super::{Group, acknowledge, bracketed, graded, non_graded, report_timings, time_per_op};
use crate::math::{IntVec2, Vec2, approx, approx_vec2};
use crate::runner::Session;

pub fn group() -> Group {
    Group {
        name: "Vec2",
        sets: vec![
            graded("Vec2 - Constructors", constructors),
            graded("Vec2 - Static Constants", static_constants),
            graded("Vec2 - Static Methods", static_methods),
            graded("Vec2 - Accessor Methods", accessors),
            graded("Vec2 - Mutator Methods", mutators),
            graded("Vec2 - Operators", operators),
            graded("Vec2 - Arithmetic Operators", arithmetic),
            graded("Vec2 - Unimplemented Methods", unimplemented),
            non_graded("Vec2 - Performance Tests", performance),
        ],
    }
}

fn constructors(t: &mut Session) -> usize {
    bracketed(t, "Vec2_Constructors", |t| {
        let v = Vec2::default();
        t.verify(approx_vec2(v, 0.0, 0.0), "Vec2 default should be (0,0)");

        let a = Vec2::new(3.5, 4.2);
        t.verify(approx_vec2(a, 3.5, 4.2), "Vec2 constructor from 2 floats failed");

        let from_int = Vec2::from(IntVec2::new(5, 8));
        t.verify(approx_vec2(from_int, 5.0, 8.0), "Vec2 from IntVec2 failed");

        let copy = a;
        t.verify(approx_vec2(copy, a.x, a.y), "Vec2 copy failed");

        t.verify(size_of::<Vec2>() == 8, "size_of::<Vec2>() should be 8 bytes (2 floats)");
    });
    5
}

fn static_constants(t: &mut Session) -> usize {
    bracketed(t, "Vec2_StaticConstants", |t| {
        t.verify(approx_vec2(Vec2::ZERO, 0.0, 0.0), "Vec2::ZERO should be (0,0)");
        t.verify(approx_vec2(Vec2::ONE, 1.0, 1.0), "Vec2::ONE should be (1,1)");
    });
    2
}

fn static_methods(t: &mut Session) -> usize {
    bracketed(t, "Vec2_StaticMethods", |t| {
        let up = Vec2::from_polar_degrees(90.0, 2.0);
        t.verify(approx_vec2(up, 0.0, 2.0), "from_polar_degrees(90, 2) should be (0,2)");

        let east = Vec2::from_polar_degrees(0.0, 5.0);
        t.verify(approx_vec2(east, 5.0, 0.0), "from_polar_degrees(0, 5) should be (5,0)");

        let diag = Vec2::from_polar_degrees(45.0, 2f32.sqrt());
        t.verify(approx_vec2(diag, 1.0, 1.0), "from_polar_degrees(45, sqrt 2) should be (1,1)");
    });
    3
}

fn accessors(t: &mut Session) -> usize {
    bracketed(t, "Vec2_AccessorMethods", |t| {
        let v = Vec2::new(3.0, 4.0);
        t.verify(approx(v.length(), 5.0), "length of (3,4) should be 5");
        t.verify(approx(v.length_squared(), 25.0), "length_squared of (3,4) should be 25");
        t.verify(
            approx(Vec2::new(0.0, 1.0).orientation_degrees(), 90.0),
            "orientation of (0,1) should be 90 degrees",
        );
        t.verify(approx_vec2(v.normalized(), 0.6, 0.8), "normalized (3,4) should be (0.6,0.8)");
        t.verify(
            approx_vec2(Vec2::ZERO.normalized(), 0.0, 0.0),
            "normalized zero vector should stay zero",
        );
        t.verify(
            approx(Vec2::new(1.0, 2.0).dot(v), 11.0),
            "dot((1,2),(3,4)) should be 11",
        );
    });
    6
}

fn mutators(t: &mut Session) -> usize {
    bracketed(t, "Vec2_MutatorMethods", |t| {
        let v = Vec2::new(3.0, 4.0);
        t.verify(approx_vec2(v.rotated_90(), -4.0, 3.0), "rotated_90 of (3,4) should be (-4,3)");

        let flipped = Vec2::new(1.0, 0.0).rotated_degrees(180.0);
        t.verify(approx_vec2(flipped, -1.0, 0.0), "rotating (1,0) by 180 should be (-1,0)");

        let mut acc = Vec2::new(1.0, 2.0);
        acc += v;
        t.verify(approx_vec2(acc, 4.0, 6.0), "(1,2) += (3,4) should be (4,6)");
    });
    3
}

fn operators(t: &mut Session) -> usize {
    bracketed(t, "Vec2_Operators", |t| {
        let a = Vec2::new(3.0, 4.0);
        t.verify(a == Vec2::new(3.0, 4.0), "== should hold for identical vectors");
        t.verify(a != Vec2::new(3.1, 4.0), "!= should hold for different vectors");
        t.verify(
            a != Vec2::new(3.0001, 4.0),
            "== should be exact, not approximate",
        );
    });
    3
}

fn arithmetic(t: &mut Session) -> usize {
    bracketed(t, "Vec2_ArithmeticOperators", |t| {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);
        t.verify(approx_vec2(a + b, 4.0, 6.0), "Vec2 addition failed");
        t.verify(approx_vec2(b - a, 2.0, 2.0), "Vec2 subtraction failed");
        t.verify(approx_vec2(a * 2.5, 2.5, 5.0), "Vec2 scalar multiplication failed");
        t.verify(approx_vec2(b / 2.0, 1.5, 2.0), "Vec2 scalar division failed");
        t.verify(approx_vec2(-a, -1.0, -2.0), "Vec2 negation failed");
    });
    5
}

fn unimplemented(t: &mut Session) -> usize {
    acknowledge(t, "Vec2_UnimplementedMethods", "reflection, text parsing, Vec3 conversion")
}

fn performance(t: &mut Session) -> usize {
    bracketed(t, "Vec2_Performance_Comprehensive", |t| {
        let base = Vec2::new(3.0, 4.0);
        let timings = [
            (
                "Constructor (2 floats)",
                time_per_op(|i| Vec2::new(i as f32 * 0.001, i as f32 * 0.002)),
            ),
            ("Addition operator", time_per_op(|_| base + Vec2::ONE)),
            ("length()", time_per_op(|_| base.length())),
            ("normalized()", time_per_op(|_| base.normalized())),
            ("Scalar multiplication", time_per_op(|_| base * 2.0)),
        ];
        let completed = report_timings(t, &timings);
        t.verify(completed, "Vec2 performance tests completed");
    });
    1
}
