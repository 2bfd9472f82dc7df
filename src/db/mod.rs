pub mod catalog;
pub mod leads;
pub mod memory;
pub mod testimonials;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use catalog::{CatalogRepository, MemCatalog};
use leads::{LeadRepository, MemLeads};
use testimonials::{MemTestimonials, TestimonialRepository};

use crate::seed::{self, SeedError, SeedReport};

/// Failure inside a repository backend.
///
/// The in-memory backend never produces one; a networked or on-disk backend
/// reports its faults through this type and the HTTP layer turns them into 500s.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),

    #[error("storage backend fault: {0}")]
    Backend(String),
}

/// The repositories the HTTP layer works against, plus the seeding guard.
#[derive(Clone)]
pub struct Storage {
    pub catalog: Arc<dyn CatalogRepository>,
    pub leads: Arc<dyn LeadRepository>,
    pub testimonials: Arc<dyn TestimonialRepository>,
    seeded: Arc<AtomicBool>,
}

impl Storage {
    pub fn new(
        catalog: Arc<dyn CatalogRepository>,
        leads: Arc<dyn LeadRepository>,
        testimonials: Arc<dyn TestimonialRepository>,
    ) -> Self {
        Self {
            catalog,
            leads,
            testimonials,
            seeded: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Empty in-memory storage. Nothing is seeded.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemCatalog::new()),
            Arc::new(MemLeads::new()),
            Arc::new(MemTestimonials::new()),
        )
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded.load(Ordering::SeqCst)
    }

    /// Claim the one seeding run this storage gets. Returns false if it was
    /// already claimed.
    pub(crate) fn claim_seed(&self) -> bool {
        self.seeded
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }
}

/// Build the process-wide in-memory storage and seed it before returning.
///
/// Callers must await this before accepting traffic so the first request sees
/// the full catalog.
pub async fn create_storage() -> Result<(Storage, SeedReport), SeedError> {
    let storage = Storage::in_memory();
    let report = seed::seed(&storage).await?;
    Ok((storage, report))
}
