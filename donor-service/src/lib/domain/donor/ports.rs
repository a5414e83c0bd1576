use async_trait::async_trait;

use crate::domain::donor::errors::DonorError;
use crate::domain::donor::models::Donor;
use crate::domain::donor::models::DonorId;
use crate::domain::donor::models::SubmitDonorCommand;

/// Port for donor record use cases.
#[async_trait]
pub trait DonorServicePort: Send + Sync + 'static {
    /// Store a new donor record and return it with its assigned id.
    ///
    /// # Errors
    /// * `StorageFailure` - Database operation failed
    async fn submit(&self, command: SubmitDonorCommand) -> Result<Donor, DonorError>;

    /// All records, ordered by id.
    async fn list(&self) -> Result<Vec<Donor>, DonorError>;

    /// # Errors
    /// * `NotFound` - No record has this id
    /// * `StorageFailure` - Database operation failed
    async fn delete(&self, id: DonorId) -> Result<(), DonorError>;
}

/// Persistence operations for donor records.
#[async_trait]
pub trait DonorRepository: Send + Sync + 'static {
    async fn create(&self, command: SubmitDonorCommand) -> Result<Donor, DonorError>;

    async fn find_all(&self) -> Result<Vec<Donor>, DonorError>;

    /// Returns whether a row was removed.
    async fn delete(&self, id: DonorId) -> Result<bool, DonorError>;
}
