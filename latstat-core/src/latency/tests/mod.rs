mod labels_tests;
mod stats_tests;
