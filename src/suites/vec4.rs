use std::mem::size_of;

use super::{Group, acknowledge, bracketed, graded};
use crate::math::{Vec4, approx, approx_vec4};
use crate::runner::Session;

pub fn group() -> Group {
    Group {
        name: "Vec4",
        sets: vec![
            graded("Vec4 - Constructors", constructors),
            graded("Vec4 - Static Constants", static_constants),
            graded("Vec4 - Static Methods", static_methods),
            graded("Vec4 - Accessor Methods", accessors),
            graded("Vec4 - Mutator Methods", mutators),
            graded("Vec4 - Operators", operators),
            graded("Vec4 - Arithmetic Operators", arithmetic),
            graded("Vec4 - Unimplemented Methods", unimplemented),
        ],
    }
}

fn constructors(t: &mut Session) -> usize {
    bracketed(t, "Vec4_Constructors", |t| {
        t.verify(
            approx_vec4(Vec4::default(), 0.0, 0.0, 0.0, 0.0),
            "Vec4 default should be (0,0,0,0)",
        );

        let a = Vec4::new(3.5, 4.2, 5.1, 6.7);
        t.verify(
            approx_vec4(a, 3.5, 4.2, 5.1, 6.7),
            "Vec4 constructor from 4 floats failed",
        );

        let copy = a;
        t.verify(approx_vec4(copy, a.x, a.y, a.z, a.w), "Vec4 copy failed");

        t.verify(size_of::<Vec4>() == 16, "size_of::<Vec4>() should be 16 bytes (4 floats)");
    });
    4
}

fn static_constants(t: &mut Session) -> usize {
    bracketed(t, "Vec4_StaticConstants", |t| {
        t.verify(approx_vec4(Vec4::ZERO, 0.0, 0.0, 0.0, 0.0), "Vec4::ZERO should be (0,0,0,0)");
        t.verify(approx_vec4(Vec4::ONE, 1.0, 1.0, 1.0, 1.0), "Vec4::ONE should be (1,1,1,1)");
        t.verify(
            approx_vec4(Vec4::X_BASIS, 1.0, 0.0, 0.0, 0.0),
            "Vec4::X_BASIS should be (1,0,0,0)",
        );
        t.verify(
            approx_vec4(Vec4::W_BASIS, 0.0, 0.0, 0.0, 1.0),
            "Vec4::W_BASIS should be (0,0,0,1)",
        );
    });
    4
}

fn static_methods(t: &mut Session) -> usize {
    bracketed(t, "Vec4_StaticMethods", |t| {
        let d = Vec4::new(1.0, 2.0, 3.0, 4.0).dot(Vec4::new(4.0, 3.0, 2.0, 1.0));
        t.verify(approx(d, 20.0), "dot((1,2,3,4),(4,3,2,1)) should be 20");
    });
    1
}

fn accessors(t: &mut Session) -> usize {
    bracketed(t, "Vec4_AccessorMethods", |t| {
        let v = Vec4::new(1.0, 2.0, 2.0, 4.0);
        t.verify(approx(v.length(), 5.0), "length of (1,2,2,4) should be 5");
        t.verify(approx(v.length_squared(), 25.0), "length_squared of (1,2,2,4) should be 25");
    });
    2
}

fn mutators(t: &mut Session) -> usize {
    bracketed(t, "Vec4_MutatorMethods", |t| {
        let mut v = Vec4::new(1.0, 2.0, 2.0, 4.0);
        v.normalize();
        t.verify(
            approx_vec4(v, 0.2, 0.4, 0.4, 0.8),
            "normalize (1,2,2,4) should be (0.2,0.4,0.4,0.8)",
        );
    });
    1
}

fn operators(t: &mut Session) -> usize {
    bracketed(t, "Vec4_Operators", |t| {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        t.verify(a == Vec4::new(1.0, 2.0, 3.0, 4.0), "== should hold for equal vectors");
        t.verify(a != Vec4::new(1.0, 2.0, 3.0, 5.0), "== should fail for different vectors");
        t.verify(
            a != Vec4::new(1.0, 2.0, 3.0, 4.0001),
            "== should be exact, not approximate",
        );
    });
    3
}

fn arithmetic(t: &mut Session) -> usize {
    bracketed(t, "Vec4_ArithmeticOperators", |t| {
        let a = Vec4::new(2.0, 3.0, 4.0, 5.0);
        let b = Vec4::new(1.0, 2.0, 3.0, 4.0);
        t.verify(approx_vec4(a + b, 3.0, 5.0, 7.0, 9.0), "Vec4 addition failed");
        t.verify(approx_vec4(a - b, 1.0, 1.0, 1.0, 1.0), "Vec4 subtraction failed");
        t.verify(approx_vec4(a * 2.0, 4.0, 6.0, 8.0, 10.0), "Vec4 scalar multiplication failed");
    });
    3
}

fn unimplemented(t: &mut Session) -> usize {
    acknowledge(t, "Vec4_UnimplementedMethods", "lerp, homogeneous point and direction")
}
