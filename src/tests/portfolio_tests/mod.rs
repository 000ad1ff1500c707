mod fetch_tests;
mod sqlite_tests;
