pub mod app;

pub use app::{body_json, get, make_test_app, make_test_app_with_policy, post_json};
