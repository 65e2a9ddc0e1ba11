mod resolver_registry_tests;
mod utils;
