pub mod operations;

pub const SIMPLE_QUERY: &str =
    include_str!("simple_query.graphql");
pub const COMPLEX_QUERY: &str =
    include_str!("complex_query.graphql");
pub const SCHEMA: &str =
    include_str!("schema.graphql");
