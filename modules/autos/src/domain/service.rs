use std::sync::Arc;

use crate::contract::model::{Automobile, AutomobilePatch, AutosList, NewAutomobile};
use crate::domain::error::DomainError;
use crate::domain::repo::AutosRepository;
use tracing::{debug, info, instrument};

/// Keep domain errors raised by the store, wrap everything else as a database failure.
fn storage_error(e: anyhow::Error) -> DomainError {
    match e.downcast::<DomainError>() {
        Ok(domain) => domain,
        Err(e) => DomainError::database(format!("{e:#}")),
    }
}

/// Domain service for automobile records.
/// Depends only on the repository port, not on infra types.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn AutosRepository>,
}

impl Service {
    pub fn new(repo: Arc<dyn AutosRepository>) -> Self {
        Self { repo }
    }

    /// Every stored automobile, in store order.
    #[instrument(name = "autos.service.get_autos", skip(self))]
    pub async fn get_autos(&self) -> Result<AutosList, DomainError> {
        debug!("Listing all automobiles");

        let autos = self
            .repo
            .find_all()
            .await
            .map_err(storage_error)?;

        debug!("Found {} automobiles", autos.len());
        Ok(autos.into())
    }

    /// Automobiles whose color and make contain the given fragments.
    /// An absent criterion acts as a wildcard.
    #[instrument(name = "autos.service.find_autos", skip(self))]
    pub async fn find_autos(
        &self,
        color: Option<&str>,
        make: Option<&str>,
    ) -> Result<AutosList, DomainError> {
        debug!("Searching automobiles");

        let autos = self
            .repo
            .find_by_filter(color, make)
            .await
            .map_err(storage_error)?;

        debug!("Found {} matching automobiles", autos.len());
        Ok(autos.into())
    }

    #[instrument(
        name = "autos.service.add_auto",
        skip(self, new_auto),
        fields(vin = %new_auto.vin, make = %new_auto.make, model = %new_auto.model)
    )]
    pub async fn add_auto(&self, new_auto: NewAutomobile) -> Result<Automobile, DomainError> {
        info!("Adding automobile");

        if self
            .repo
            .vin_exists(&new_auto.vin)
            .await
            .map_err(storage_error)?
        {
            return Err(DomainError::vin_already_exists(new_auto.vin));
        }

        let auto = self
            .repo
            .insert(new_auto)
            .await
            .map_err(storage_error)?;

        info!("Stored automobile with id={}", auto.id);
        Ok(auto)
    }

    #[instrument(name = "autos.service.get_auto", skip(self), fields(vin = %vin))]
    pub async fn get_auto(&self, vin: &str) -> Result<Automobile, DomainError> {
        debug!("Getting automobile by VIN");

        self.repo
            .find_by_vin(vin)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| DomainError::auto_not_found(vin))
    }

    /// Apply `patch` to the automobile with `vin`.
    ///
    /// The lookup happens first, so an unknown VIN is reported as not found
    /// even when the patch is empty. An empty patch leaves the record untouched.
    #[instrument(name = "autos.service.update_auto", skip(self, patch), fields(vin = %vin))]
    pub async fn update_auto(
        &self,
        vin: &str,
        patch: AutomobilePatch,
    ) -> Result<Automobile, DomainError> {
        info!("Updating automobile");

        let mut current = self.get_auto(vin).await?;

        if patch.is_empty() {
            debug!("Empty patch, nothing to persist");
            return Ok(current);
        }

        patch.apply_to(&mut current);

        self.repo
            .update(current.clone())
            .await
            .map_err(storage_error)?;

        info!("Successfully updated automobile");
        Ok(current)
    }

    #[instrument(name = "autos.service.delete_auto", skip(self), fields(vin = %vin))]
    pub async fn delete_auto(&self, vin: &str) -> Result<(), DomainError> {
        info!("Deleting automobile");

        let deleted = self
            .repo
            .delete_by_vin(vin)
            .await
            .map_err(storage_error)?;

        if !deleted {
            return Err(DomainError::auto_not_found(vin));
        }

        info!("Successfully deleted automobile");
        Ok(())
    }
}
