use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::donor::models::Donor;
use crate::domain::donor::models::DonorId;
use crate::domain::donor::models::SubmitDonorCommand;
use crate::donor::errors::DonorError;
use crate::donor::ports::DonorRepository;
use crate::donor::ports::DonorServicePort;

pub struct DonorService<DR>
where
    DR: DonorRepository,
{
    repository: Arc<DR>,
}

impl<DR> DonorService<DR>
where
    DR: DonorRepository,
{
    pub fn new(repository: Arc<DR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<DR> DonorServicePort for DonorService<DR>
where
    DR: DonorRepository,
{
    async fn submit(&self, command: SubmitDonorCommand) -> Result<Donor, DonorError> {
        let donor = self.repository.create(command).await?;

        tracing::info!(
            donor_id = %donor.id,
            blood_group = %donor.blood_group,
            "Donor record submitted"
        );

        Ok(donor)
    }

    async fn list(&self) -> Result<Vec<Donor>, DonorError> {
        let mut donors = self.repository.find_all().await?;
        donors.sort_by_key(|donor| donor.id);
        Ok(donors)
    }

    async fn delete(&self, id: DonorId) -> Result<(), DonorError> {
        if !self.repository.delete(id).await? {
            return Err(DonorError::NotFound(id));
        }

        tracing::info!(donor_id = %id, "Donor record deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::donor::models::BloodGroup;
    use crate::domain::donor::models::DonorName;

    mock! {
        pub TestDonorRepository {}

        #[async_trait]
        impl DonorRepository for TestDonorRepository {
            async fn create(&self, command: SubmitDonorCommand) -> Result<Donor, DonorError>;
            async fn find_all(&self) -> Result<Vec<Donor>, DonorError>;
            async fn delete(&self, id: DonorId) -> Result<bool, DonorError>;
        }
    }

    fn donor(id: i32, name: &str, blood_group: BloodGroup) -> Donor {
        Donor {
            id: DonorId(id),
            name: DonorName::new(name.to_string()).unwrap(),
            blood_group,
        }
    }

    #[tokio::test]
    async fn test_submit_returns_stored_record() {
        let mut repository = MockTestDonorRepository::new();

        repository
            .expect_create()
            .withf(|command| {
                command.name.as_str() == "Bob" && command.blood_group == BloodGroup::ONegative
            })
            .times(1)
            .returning(|command| {
                Ok(Donor {
                    id: DonorId(7),
                    name: command.name,
                    blood_group: command.blood_group,
                })
            });

        let service = DonorService::new(Arc::new(repository));
        let command = SubmitDonorCommand::new(
            DonorName::new("Bob".to_string()).unwrap(),
            BloodGroup::ONegative,
        );

        let stored = service.submit(command).await.unwrap();
        assert_eq!(stored, donor(7, "Bob", BloodGroup::ONegative));
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let mut repository = MockTestDonorRepository::new();

        repository.expect_find_all().times(1).returning(|| {
            Ok(vec![
                donor(3, "Cy", BloodGroup::BPositive),
                donor(1, "Al", BloodGroup::APositive),
                donor(2, "Bo", BloodGroup::AbNegative),
            ])
        });

        let service = DonorService::new(Arc::new(repository));
        let ids: Vec<i32> = service
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|donor| donor.id.0)
            .collect();

        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_delete_existing() {
        let mut repository = MockTestDonorRepository::new();

        repository
            .expect_delete()
            .with(eq(DonorId(4)))
            .times(1)
            .returning(|_| Ok(true));

        let service = DonorService::new(Arc::new(repository));
        assert!(service.delete(DonorId(4)).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let mut repository = MockTestDonorRepository::new();

        repository.expect_delete().times(1).returning(|_| Ok(false));

        let service = DonorService::new(Arc::new(repository));
        let result = service.delete(DonorId(99)).await;

        assert!(matches!(result, Err(DonorError::NotFound(DonorId(99)))));
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let mut repository = MockTestDonorRepository::new();

        repository
            .expect_find_all()
            .times(1)
            .returning(|| Err(DonorError::StorageFailure("connection refused".to_string())));

        let service = DonorService::new(Arc::new(repository));
        assert!(matches!(
            service.list().await,
            Err(DonorError::StorageFailure(_))
        ));
    }
}
