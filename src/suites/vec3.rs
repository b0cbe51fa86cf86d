use std::mem::size_of;

use super::{Group, acknowledge, bracketed, graded, non_graded, report_timings, time_per_op};
use crate::math::{IntVec3, Vec3, approx, approx_vec3};
use crate::runner::Session;

pub fn group() -> Group {
    Group {
        name: "Vec3",
        sets: vec![
            graded("Vec3 - Constructors", constructors),
            graded("Vec3 - Static Constants", static_constants),
            graded("Vec3 - Static Methods", static_methods),
            graded("Vec3 - Accessor Methods", accessors),
            graded("Vec3 - Mutator Methods", mutators),
            graded("Vec3 - Operators", operators),
            graded("Vec3 - Arithmetic Operators", arithmetic),
            graded("Vec3 - Unimplemented Methods", unimplemented),
            non_graded("Vec3 - Performance Tests", performance),
        ],
    }
}

fn constructors(t: &mut Session) -> usize {
    bracketed(t, "Vec3_Constructors", |t| {
        t.verify(
            approx_vec3(Vec3::default(), 0.0, 0.0, 0.0),
            "Vec3 default should be (0,0,0)",
        );

        let a = Vec3::new(3.5, 4.2, 5.1);
        t.verify(approx_vec3(a, 3.5, 4.2, 5.1), "Vec3 constructor from 3 floats failed");

        let from_int = Vec3::from(IntVec3::new(7, 9, 2));
        t.verify(approx_vec3(from_int, 7.0, 9.0, 2.0), "Vec3 from IntVec3 failed");

        let copy = a;
        t.verify(approx_vec3(copy, a.x, a.y, a.z), "Vec3 copy failed");

        t.verify(size_of::<Vec3>() == 12, "size_of::<Vec3>() should be 12 bytes (3 floats)");
    });
    5
}

fn static_constants(t: &mut Session) -> usize {
    bracketed(t, "Vec3_StaticConstants", |t| {
        t.verify(approx_vec3(Vec3::ZERO, 0.0, 0.0, 0.0), "Vec3::ZERO should be (0,0,0)");
        t.verify(approx_vec3(Vec3::ONE, 1.0, 1.0, 1.0), "Vec3::ONE should be (1,1,1)");
        t.verify(approx_vec3(Vec3::X_BASIS, 1.0, 0.0, 0.0), "Vec3::X_BASIS should be (1,0,0)");
        t.verify(approx_vec3(Vec3::Y_BASIS, 0.0, 1.0, 0.0), "Vec3::Y_BASIS should be (0,1,0)");
        t.verify(approx_vec3(Vec3::Z_BASIS, 0.0, 0.0, 1.0), "Vec3::Z_BASIS should be (0,0,1)");
    });
    5
}

fn static_methods(t: &mut Session) -> usize {
    bracketed(t, "Vec3_StaticMethods", |t| {
        let z = Vec3::X_BASIS.cross(Vec3::Y_BASIS);
        t.verify(approx_vec3(z, 0.0, 0.0, 1.0), "X cross Y should be Z");
        t.verify(
            approx(Vec3::X_BASIS.dot(Vec3::Y_BASIS), 0.0),
            "basis vectors should be orthogonal",
        );
        let d = Vec3::distance(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 6.0, 3.0));
        t.verify(approx(d, 5.0), "distance (1,2,3)-(4,6,3) should be 5");
    });
    3
}

fn accessors(t: &mut Session) -> usize {
    bracketed(t, "Vec3_AccessorMethods", |t| {
        let v = Vec3::new(2.0, 3.0, 6.0);
        t.verify(approx(v.length(), 7.0), "length of (2,3,6) should be 7");
        t.verify(approx(v.length_squared(), 49.0), "length_squared of (2,3,6) should be 49");
        t.verify(
            approx_vec3(v.normalized(), 2.0 / 7.0, 3.0 / 7.0, 6.0 / 7.0),
            "normalized (2,3,6) should be (2/7,3/7,6/7)",
        );
    });
    3
}

fn mutators(t: &mut Session) -> usize {
    bracketed(t, "Vec3_MutatorMethods", |t| {
        let mut v = Vec3::new(3.0, 4.0, 0.0);
        v.set_length(10.0);
        t.verify(approx_vec3(v, 6.0, 8.0, 0.0), "set_length(10) on (3,4,0) should be (6,8,0)");

        let mut up = Vec3::new(0.0, 0.0, 5.0);
        up.normalize();
        t.verify(approx_vec3(up, 0.0, 0.0, 1.0), "normalize (0,0,5) should be (0,0,1)");

        let mut zero = Vec3::ZERO;
        zero.normalize();
        t.verify(approx_vec3(zero, 0.0, 0.0, 0.0), "normalize zero vector should stay zero");
    });
    3
}

fn operators(t: &mut Session) -> usize {
    bracketed(t, "Vec3_Operators", |t| {
        let a = Vec3::new(1.0, 2.0, 3.0);
        t.verify(a == Vec3::new(1.0, 2.0, 3.0), "== should hold for equal vectors");
        t.verify(a != Vec3::new(1.0, 2.0, 4.0), "== should fail for different vectors");
        t.verify(
            a != Vec3::new(1.0001, 2.0, 3.0),
            "== should be exact, not approximate",
        );
    });
    3
}

fn arithmetic(t: &mut Session) -> usize {
    bracketed(t, "Vec3_ArithmeticOperators", |t| {
        let a = Vec3::new(2.0, 3.0, 4.0);
        let b = Vec3::new(1.0, 2.0, 3.0);
        t.verify(approx_vec3(a + b, 3.0, 5.0, 7.0), "Vec3 addition failed");
        t.verify(approx_vec3(a - b, 1.0, 1.0, 1.0), "Vec3 subtraction failed");
        t.verify(approx_vec3(a * 2.0, 4.0, 6.0, 8.0), "Vec3 scalar multiplication failed");
        t.verify(approx_vec3(a / 2.0, 1.0, 1.5, 2.0), "Vec3 scalar division failed");

        let mut acc = b;
        acc += a;
        t.verify(approx_vec3(acc, 3.0, 5.0, 7.0), "Vec3 += failed");
    });
    5
}

fn unimplemented(t: &mut Session) -> usize {
    acknowledge(t, "Vec3_UnimplementedMethods", "lerp, reflection, text parsing")
}

fn performance(t: &mut Session) -> usize {
    bracketed(t, "Vec3_Performance_Comprehensive", |t| {
        let base = Vec3::new(2.0, 3.0, 6.0);
        let timings = [
            (
                "Constructor (3 floats)",
                time_per_op(|i| Vec3::new(i as f32, i as f32 * 0.5, 1.0)),
            ),
            ("Addition operator", time_per_op(|_| base + Vec3::ONE)),
            ("cross()", time_per_op(|_| base.cross(Vec3::Z_BASIS))),
            ("normalized()", time_per_op(|_| base.normalized())),
        ];
        let completed = report_timings(t, &timings);
        t.verify(completed, "Vec3 performance tests completed");
    });
    1
}
