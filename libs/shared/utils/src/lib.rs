pub mod extractor;
pub mod id_generator;
pub mod jwt;
pub mod test_utils;
pub mod validation;
