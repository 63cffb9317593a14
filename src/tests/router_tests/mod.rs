mod charts_tests;
mod geo_tests;
mod navigation_tests;
