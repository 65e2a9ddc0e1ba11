mod graphql_parser_document_tests;
mod graphql_parser_operation_tests;
mod graphql_parser_type_annotation_tests;
mod graphql_parser_value_tests;
mod utils;
