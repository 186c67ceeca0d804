// src/site.rs

use crate::catalog::{ListingSource, StaticCatalog};
use crate::config::SiteConfig;
use crate::inquiry::{InquirySink, LogInquirySink};

/// Everything a request handler needs, shared by all workers.
pub struct Site {
    pub config: SiteConfig,
    pub catalog: Box<dyn ListingSource + Send + Sync>,
    pub inquiries: Box<dyn InquirySink>,
}

impl Site {
    pub fn new(config: SiteConfig) -> Self {
        Site {
            config,
            catalog: Box::new(StaticCatalog),
            inquiries: Box::new(LogInquirySink),
        }
    }

    #[cfg(test)]
    pub fn with_inquiry_sink(mut self, sink: impl InquirySink + 'static) -> Self {
        self.inquiries = Box::new(sink);
        self
    }
}
