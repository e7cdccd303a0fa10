use crate::dom::Document;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Shared owner of a page model.
///
/// Handlers lock the document only between await points; a guard is never
/// held across a request.
#[derive(Debug)]
pub struct Page {
    document: Mutex<Document>,
}

impl Page {
    pub fn new(document: Document) -> Self {
        Self {
            document: Mutex::new(document),
        }
    }

    pub fn lock(&self) -> MutexGuard<'_, Document> {
        self.document.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn read<R>(&self, f: impl FnOnce(&Document) -> R) -> R {
        f(&self.lock())
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut Document) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn snapshot(&self) -> Document {
        self.lock().clone()
    }

    pub fn into_document(self) -> Document {
        self.document
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Document> for Page {
    fn from(document: Document) -> Self {
        Self::new(document)
    }
}
