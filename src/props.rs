use proptest::prelude::*;

use crate::vec3::Vec3;

prop_compose! {
    // finite components keep the exact algebraic identities exact
    pub(crate) fn component()(x in -1.0e6..1.0e6f64) -> f64 {
        x
    }
}

prop_compose! {
    pub(crate) fn scalar()(t in -1.0e3..1.0e3f64) -> f64 {
        t
    }
}

prop_compose! {
    pub(crate) fn vector()(x in component(), y in component(), z in component()) -> Vec3 {
        Vec3::new(x, y, z)
    }
}
