mod graphql_parser_schema_tests;
mod utils;
