//! Integration tests, compiled as a single test binary.

mod corpus_test;
mod helpers;
mod pipeline_test;
mod properties_test;
