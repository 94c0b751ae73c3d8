#![allow(dead_code)]

pub use dayplan_test_utils::{
    builders, fixtures, init_tracing, nine_am, run_from_nine, with_timeout, NINE_AM,
};
