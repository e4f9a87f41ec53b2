//! End-to-end tests: the full engine rendering into a real framebuffer.

mod cli_tests;
