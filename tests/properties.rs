//! Property tests for NavBuilder.
//!
//! Properties use randomized input generation to protect invariants like
//! "insertion order is preserved" and "rendering never panics".
//!
//! Run with: `cargo test --test properties`

#[path = "properties/rendering.rs"]
mod rendering;

#[path = "properties/slug.rs"]
mod slug;
