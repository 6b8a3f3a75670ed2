mod series_tests;
mod test_helpers;
