mod artifacts_tests;
mod render_tests;
