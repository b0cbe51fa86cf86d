use std::mem::size_of;

use super::{Group, acknowledge, bracketed, graded};
use crate::math::{IntVec2, IntVec3, ParseVecError, approx};
use crate::runner::Session;

pub fn group() -> Group {
    Group {
        name: "IntVec3",
        sets: vec![
            graded("IntVec3 - Constructors", constructors),
            graded("IntVec3 - Static Constants", static_constants),
            graded("IntVec3 - Static Methods", static_methods),
            graded("IntVec3 - Accessor Methods", accessors),
            graded("IntVec3 - Mutator Methods", mutators),
            graded("IntVec3 - Operators", operators),
            graded("IntVec3 - Arithmetic Operators", arithmetic),
            graded("IntVec3 - Unimplemented Methods", unimplemented),
        ],
    }
}

fn constructors(t: &mut Session) -> usize {
    bracketed(t, "IntVec3_Constructors", |t| {
        t.verify(
            IntVec3::default() == IntVec3::new(0, 0, 0),
            "IntVec3 default should be (0,0,0)",
        );

        let v = IntVec3::new(3, 4, 5);
        t.verify(
            v.x == 3 && v.y == 4 && v.z == 5,
            "IntVec3 constructor from 3 ints failed",
        );
        t.verify(
            IntVec3::truncating(7.8, 9.2, -2.1) == IntVec3::new(7, 9, -2),
            "IntVec3 from 3 floats should truncate toward zero",
        );

        let copy = v;
        t.verify(copy == v, "IntVec3 copy failed");

        t.verify(size_of::<IntVec3>() == 12, "size_of::<IntVec3>() should be 12 bytes (3 ints)");
    });
    5
}

fn static_constants(t: &mut Session) -> usize {
    bracketed(t, "IntVec3_StaticConstants", |t| {
        t.verify(IntVec3::ZERO == IntVec3::new(0, 0, 0), "IntVec3::ZERO should be (0,0,0)");
        t.verify(IntVec3::ONE == IntVec3::new(1, 1, 1), "IntVec3::ONE should be (1,1,1)");
        t.verify(
            IntVec3::NEGATIVE_ONE == IntVec3::new(-1, -1, -1),
            "IntVec3::NEGATIVE_ONE should be (-1,-1,-1)",
        );
    });
    3
}

fn static_methods(t: &mut Session) -> usize {
    bracketed(t, "IntVec3_StaticMethods", |t| {
        let a = IntVec3::new(1, 2, 3);
        let b = IntVec3::new(4, 6, 3);
        t.verify(IntVec3::taxicab_distance(a, b) == 7, "taxicab distance should be 7");
        t.verify(approx(IntVec3::distance(a, b), 5.0), "distance should be 5");
    });
    2
}

fn accessors(t: &mut Session) -> usize {
    bracketed(t, "IntVec3_AccessorMethods", |t| {
        let v = IntVec3::new(3, 4, 0);
        t.verify(approx(v.length(), 5.0), "length of (3,4,0) should be 5");
        t.verify(v.length_squared() == 25, "length_squared of (3,4,0) should be 25");
        t.verify(
            IntVec3::new(-3, 4, -2).taxicab_length() == 9,
            "taxicab length of (-3,4,-2) should be 9",
        );
        t.verify(v.xy() == IntVec2::new(3, 4), "xy of (3,4,0) should be (3,4)");
    });
    4
}

fn mutators(t: &mut Session) -> usize {
    bracketed(t, "IntVec3_MutatorMethods", |t| {
        let mut v = IntVec3::ZERO;
        let parsed = v.set_from_text("5,6,7");
        t.verify(
            parsed.is_ok() && v == IntVec3::new(5, 6, 7),
            "set_from_text(\"5,6,7\") should give (5,6,7)",
        );

        let short = v.set_from_text("1,2");
        let arity = Err(ParseVecError::Arity {
            expected: 3,
            found: 2,
        });
        t.verify(
            short == arity && v == IntVec3::new(5, 6, 7),
            "set_from_text with 2 components should fail and keep the value",
        );

        let bad = v.set_from_text("1,two,3");
        t.verify(
            matches!(bad, Err(ParseVecError::Component(ref c)) if c == "two"),
            "set_from_text should reject a non-integer component",
        );
    });
    3
}

fn operators(t: &mut Session) -> usize {
    bracketed(t, "IntVec3_Operators", |t| {
        let a = IntVec3::new(1, 2, 3);
        let same = IntVec3::new(1, 2, 3);
        let other = IntVec3::new(1, 2, 4);
        let equal_to_other = a == other;
        let differs_from_same = a != same;
        t.verify(a == same, "== should hold for equal vectors");
        t.verify(!equal_to_other, "== should fail for different vectors");
        t.verify(a != other, "!= should hold for different vectors");
        t.verify(!differs_from_same, "!= should fail for equal vectors");
        t.verify(
            IntVec3::new(0, 9, 9) < a,
            "< should order lexicographically for sorted containers",
        );
    });
    5
}

fn arithmetic(t: &mut Session) -> usize {
    bracketed(t, "IntVec3_ArithmeticOperators", |t| {
        let a = IntVec3::new(2, 3, 4);
        let b = IntVec3::new(1, 2, 3);
        t.verify(a + b == IntVec3::new(3, 5, 7), "IntVec3 addition failed");
        t.verify(a - b == IntVec3::new(1, 1, 1), "IntVec3 subtraction failed");
        t.verify(-a == IntVec3::new(-2, -3, -4), "IntVec3 negation failed");
        t.verify(a * 2 == IntVec3::new(4, 6, 8), "IntVec3 scalar multiplication failed");

        let mut sum = a;
        sum += b;
        t.verify(sum == IntVec3::new(3, 5, 7), "IntVec3 += failed");

        let mut diff = a;
        diff -= b;
        t.verify(diff == IntVec3::new(1, 1, 1), "IntVec3 -= failed");

        let mut scaled = a;
        scaled *= 2;
        t.verify(scaled == IntVec3::new(4, 6, 8), "IntVec3 *= failed");
    });
    7
}

fn unimplemented(t: &mut Session) -> usize {
    acknowledge(t, "IntVec3_UnimplementedMethods", "lerp, cross product, grid neighbours")
}
