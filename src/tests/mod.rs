//! Harness-driven tests for the terminal host.

mod screen_rendering;
