use async_trait::async_trait;
use uuid::Uuid;

use super::StoreError;
use super::memory::{MemTable, Record};
use crate::models::testimonials::{NewTestimonial, Testimonial};

#[async_trait]
pub trait TestimonialRepository: Send + Sync {
    async fn create_testimonial(&self, input: NewTestimonial) -> Result<Testimonial, StoreError>;
    async fn get_testimonial(&self, id: Uuid) -> Result<Option<Testimonial>, StoreError>;
    async fn list_testimonials(&self) -> Result<Vec<Testimonial>, StoreError>;
}

impl Record for Testimonial {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Default)]
pub struct MemTestimonials {
    testimonials: MemTable<Testimonial>,
}

impl MemTestimonials {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TestimonialRepository for MemTestimonials {
    async fn create_testimonial(&self, input: NewTestimonial) -> Result<Testimonial, StoreError> {
        Ok(self
            .testimonials
            .insert_with(|id| input.into_record(id))
            .await)
    }

    async fn get_testimonial(&self, id: Uuid) -> Result<Option<Testimonial>, StoreError> {
        Ok(self.testimonials.get(id).await)
    }

    async fn list_testimonials(&self) -> Result<Vec<Testimonial>, StoreError> {
        Ok(self.testimonials.all().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn testimonial_reads_back_by_id() {
        let store = MemTestimonials::new();
        let created = store
            .create_testimonial(NewTestimonial {
                student_name: "Priya Patel".to_string(),
                college: "VJTI Mumbai".to_string(),
                quote: "Got the full report and PPT on time.".to_string(),
                rating: 5,
                project_category: "cs".to_string(),
                avatar_url: None,
            })
            .await
            .unwrap();

        assert_eq!(store.get_testimonial(created.id).await.unwrap(), Some(created.clone()));
        assert_eq!(store.list_testimonials().await.unwrap(), vec![created]);
    }
}
