mod harness_test;
mod program_test;
