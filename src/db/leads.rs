use async_trait::async_trait;
use uuid::Uuid;

use super::StoreError;
use super::memory::{MemTable, Record};
use crate::models::custom_requests::{CustomRequest, NewCustomRequest};
use crate::models::inquiries::{Inquiry, NewInquiry};

/// Inquiries and custom requests. Grows only: create and read, nothing else.
///
/// Custom request status is pinned to `pending` on create. There is no
/// status transition here yet; a future `update_custom_request_status` can be
/// added to this trait without touching the existing methods.
#[async_trait]
pub trait LeadRepository: Send + Sync {
    async fn create_inquiry(&self, input: NewInquiry) -> Result<Inquiry, StoreError>;
    async fn get_inquiry(&self, id: Uuid) -> Result<Option<Inquiry>, StoreError>;
    async fn list_inquiries(&self) -> Result<Vec<Inquiry>, StoreError>;

    async fn create_custom_request(
        &self,
        input: NewCustomRequest,
    ) -> Result<CustomRequest, StoreError>;
    async fn get_custom_request(&self, id: Uuid) -> Result<Option<CustomRequest>, StoreError>;
    async fn list_custom_requests(&self) -> Result<Vec<CustomRequest>, StoreError>;
}

impl Record for Inquiry {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for CustomRequest {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Default)]
pub struct MemLeads {
    inquiries: MemTable<Inquiry>,
    custom_requests: MemTable<CustomRequest>,
}

impl MemLeads {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LeadRepository for MemLeads {
    async fn create_inquiry(&self, input: NewInquiry) -> Result<Inquiry, StoreError> {
        Ok(self.inquiries.insert_with(|id| input.into_record(id)).await)
    }

    async fn get_inquiry(&self, id: Uuid) -> Result<Option<Inquiry>, StoreError> {
        Ok(self.inquiries.get(id).await)
    }

    async fn list_inquiries(&self) -> Result<Vec<Inquiry>, StoreError> {
        Ok(self.inquiries.all().await)
    }

    async fn create_custom_request(
        &self,
        input: NewCustomRequest,
    ) -> Result<CustomRequest, StoreError> {
        Ok(self
            .custom_requests
            .insert_with(|id| input.into_record(id))
            .await)
    }

    async fn get_custom_request(&self, id: Uuid) -> Result<Option<CustomRequest>, StoreError> {
        Ok(self.custom_requests.get(id).await)
    }

    async fn list_custom_requests(&self) -> Result<Vec<CustomRequest>, StoreError> {
        Ok(self.custom_requests.all().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::custom_requests::RequestStatus;

    fn inquiry(name: &str) -> NewInquiry {
        NewInquiry {
            name: name.to_string(),
            branch: "cs".to_string(),
            whatsapp: "9876543210".to_string(),
            requirement: "Need a final year ML project".to_string(),
        }
    }

    #[tokio::test]
    async fn inquiry_reads_back_by_id() {
        let leads = MemLeads::new();
        let created = leads.create_inquiry(inquiry("Asha")).await.unwrap();

        assert_eq!(leads.get_inquiry(created.id).await.unwrap(), Some(created));
        assert_eq!(leads.get_inquiry(Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn custom_request_is_stored_pending() {
        let leads = MemLeads::new();
        let created = leads
            .create_custom_request(NewCustomRequest {
                name: "Vikram".to_string(),
                email: None,
                whatsapp: "9876543210".to_string(),
                branch: "ece".to_string(),
                project_title: None,
                requirements: "IoT based smart energy meter with app".to_string(),
                technologies: Some(vec!["ESP32".to_string()]),
                deadline: None,
                budget: None,
                additional_notes: None,
            })
            .await
            .unwrap();

        let stored = leads.get_custom_request(created.id).await.unwrap().unwrap();
        assert_eq!(stored.status, RequestStatus::Pending);
        assert_eq!(leads.list_custom_requests().await.unwrap(), vec![stored]);
        assert!(leads.list_inquiries().await.unwrap().is_empty());
    }
}
