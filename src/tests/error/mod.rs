mod display_tests;
#[cfg(feature = "miette")]
mod miette_tests;
