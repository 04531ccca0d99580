mod scenario_tests;
mod table_tests;
