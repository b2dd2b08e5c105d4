mod parse_tests;
#[cfg(feature = "sarge")]
mod sarge_tests;
