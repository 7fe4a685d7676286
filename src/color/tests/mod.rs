mod test_utils;
mod frequency_tests;
mod record_tests;
