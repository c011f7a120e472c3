mod executor_tests;
mod utils;
