use catalog_core::ports::Application;
use catalog_sqlite::Db;

/// Test state: a real SQLite-backed repository, or `None` to exercise the
/// degraded-mode path.
#[derive(Clone)]
pub struct TestApp(pub Option<Db>);

impl Application for TestApp {
    type Repository = Db;

    fn database(&self) -> Option<&Db> {
        self.0.as_ref()
    }
}
