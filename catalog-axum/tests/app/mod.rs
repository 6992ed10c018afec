mod application;

pub use application::TestApp;
