//! Resolver module tests.

mod builder_tests;
