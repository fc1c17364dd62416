mod lift_tests;
mod pages_tests;
mod watch_tests;
