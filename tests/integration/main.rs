#![allow(clippy::expect_used)]

mod monitor_test;
mod scheduler_test;
mod support;
