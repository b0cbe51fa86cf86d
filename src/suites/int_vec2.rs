use std::mem::size_of;

use super::{Group, acknowledge, bracketed, graded};
use crate::math::IntVec2;
use crate::runner::Session;

pub fn group() -> Group {
    Group {
        name: "IntVec2",
        sets: vec![
            graded("IntVec2 - Constructors", constructors),
            graded("IntVec2 - Static Constants", static_constants),
            graded("IntVec2 - Accessor Methods", accessors),
            graded("IntVec2 - Mutator Methods", mutators),
            graded("IntVec2 - Operators", operators),
            graded("IntVec2 - Arithmetic Operators", arithmetic),
            graded("IntVec2 - Unimplemented Methods", unimplemented),
        ],
    }
}

fn constructors(t: &mut Session) -> usize {
    bracketed(t, "IntVec2_Constructors", |t| {
        t.verify(
            IntVec2::default() == IntVec2::new(0, 0),
            "IntVec2 default should be (0,0)",
        );

        let v = IntVec2::new(3, -4);
        t.verify(v.x == 3 && v.y == -4, "IntVec2 constructor from 2 ints failed");

        let copy = v;
        t.verify(copy == v, "IntVec2 copy failed");

        t.verify(size_of::<IntVec2>() == 8, "size_of::<IntVec2>() should be 8 bytes (2 ints)");
    });
    4
}

fn static_constants(t: &mut Session) -> usize {
    bracketed(t, "IntVec2_StaticConstants", |t| {
        t.verify(IntVec2::ZERO == IntVec2::new(0, 0), "IntVec2::ZERO should be (0,0)");
        t.verify(IntVec2::ONE == IntVec2::new(1, 1), "IntVec2::ONE should be (1,1)");
        t.verify(
            IntVec2::NEGATIVE_ONE == IntVec2::new(-1, -1),
            "IntVec2::NEGATIVE_ONE should be (-1,-1)",
        );
    });
    3
}

fn accessors(t: &mut Session) -> usize {
    bracketed(t, "IntVec2_AccessorMethods", |t| {
        let v = IntVec2::new(3, -4);
        t.verify(v.length_squared() == 25, "length_squared of (3,-4) should be 25");
        t.verify(v.taxicab_length() == 7, "taxicab length of (3,-4) should be 7");
        t.verify(
            IntVec2::new(-2, -5).taxicab_length() == 7,
            "taxicab length of (-2,-5) should be 7",
        );
    });
    3
}

fn mutators(t: &mut Session) -> usize {
    bracketed(t, "IntVec2_MutatorMethods", |t| {
        let v = IntVec2::new(3, 4);
        t.verify(v.rotated_90() == IntVec2::new(-4, 3), "rotated_90 of (3,4) should be (-4,3)");
        t.verify(
            v.rotated_minus_90() == IntVec2::new(4, -3),
            "rotated_minus_90 of (3,4) should be (4,-3)",
        );
        let full_turn = v.rotated_90().rotated_90().rotated_90().rotated_90();
        t.verify(full_turn == v, "four 90-degree rotations should return the original");
    });
    3
}

fn operators(t: &mut Session) -> usize {
    bracketed(t, "IntVec2_Operators", |t| {
        let a = IntVec2::new(3, 4);
        let same = IntVec2::new(3, 4);
        let other = IntVec2::new(3, 5);
        let equal_to_other = a == other;
        let differs_from_same = a != same;
        t.verify(a == same, "== should hold for equal vectors");
        t.verify(!equal_to_other, "== should fail for different vectors");
        t.verify(a != other, "!= should hold for different vectors");
        t.verify(!differs_from_same, "!= should fail for equal vectors");
    });
    4
}

fn arithmetic(t: &mut Session) -> usize {
    bracketed(t, "IntVec2_ArithmeticOperators", |t| {
        t.verify(
            IntVec2::new(1, 2) + IntVec2::new(3, 4) == IntVec2::new(4, 6),
            "IntVec2 addition failed",
        );
        t.verify(
            IntVec2::new(5, 5) - IntVec2::new(2, 3) == IntVec2::new(3, 2),
            "IntVec2 subtraction failed",
        );
        t.verify(
            IntVec2::new(2, -3) * 3 == IntVec2::new(6, -9),
            "IntVec2 scalar multiplication failed",
        );
    });
    3
}

fn unimplemented(t: &mut Session) -> usize {
    acknowledge(t, "IntVec2_UnimplementedMethods", "distance, lerp, grid neighbours")
}
