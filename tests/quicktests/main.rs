//! Property tests for the public `Tree` API.

mod tree;
