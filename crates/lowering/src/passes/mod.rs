//! Tree-rewrite passes.

pub mod interpolation;

pub use interpolation::{
    count_interpolations, lower_literal, lower_tree, InterpolationLowering, LowerContext,
    LowerStats, Lowered,
};
