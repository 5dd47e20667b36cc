use deptrace::prelude::*;
use deptrace::shared::error::DeptraceError;
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

/// Mock MetadataReader serving fixed text and recording requested locations
///
/// Clones share the request log, so a test can keep one handle after
/// moving the other into a use case.
#[derive(Clone)]
pub struct MockMetadataReader {
    pub content: String,
    pub should_fail: bool,
    pub requested: Rc<RefCell<Vec<String>>>,
}

impl MockMetadataReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
            should_fail: false,
            requested: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new("")
        }
    }

    pub fn get_requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }

    fn serve(&self, location: String) -> Result<String> {
        self.requested.borrow_mut().push(location.clone());
        if self.should_fail {
            return Err(DeptraceError::MetadataSourceMissing {
                path: location,
                suggestion: "Mock metadata reader failure".to_string(),
            }
            .into());
        }
        Ok(self.content.clone())
    }
}

impl MetadataReader for MockMetadataReader {
    fn read_packages_index(&self, repository: &str) -> Result<String> {
        self.serve(format!("index:{}", repository))
    }

    fn read_test_graph(&self, path: &Path) -> Result<String> {
        self.serve(format!("graph:{}", path.display()))
    }
}
