#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use anyhow::Result;
use autos::contract::model::{Automobile, NewAutomobile};
use autos::domain::repo::AutosRepository;
use autos::domain::service::Service;
use sea_orm::{Database, DatabaseConnection};

/// In-memory repository following the `AutosRepository::find_by_filter`
/// contract: literal substring match, and a missing color never matches a
/// color filter. Matching is case-sensitive, as with `LIKE` on Postgres;
/// SQLite's ASCII case folding is covered by the integration tests.
#[derive(Default)]
pub struct MockAutosRepository {
    autos: Mutex<Vec<Automobile>>,
    next_id: Mutex<i32>,
}

impl MockAutosRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(autos: Vec<NewAutomobile>) -> Self {
        let repo = Self::new();
        for a in autos {
            repo.push(a);
        }
        repo
    }

    fn push(&self, new_auto: NewAutomobile) -> Automobile {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let auto = Automobile {
            id: *next_id,
            year: new_auto.year,
            make: new_auto.make,
            model: new_auto.model,
            color: new_auto.color,
            owner: new_auto.owner,
            purchase_date: new_auto.purchase_date,
            vin: new_auto.vin,
        };
        self.autos.lock().unwrap().push(auto.clone());
        auto
    }

    pub fn snapshot(&self) -> Vec<Automobile> {
        self.autos.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl AutosRepository for MockAutosRepository {
    async fn find_all(&self) -> Result<Vec<Automobile>> {
        Ok(self.snapshot())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Automobile>> {
        Ok(self.snapshot().into_iter().find(|a| a.id == id))
    }

    async fn find_by_vin(&self, vin: &str) -> Result<Option<Automobile>> {
        Ok(self.snapshot().into_iter().find(|a| a.vin == vin))
    }

    async fn find_by_filter(
        &self,
        color: Option<&str>,
        make: Option<&str>,
    ) -> Result<Vec<Automobile>> {
        Ok(self
            .snapshot()
            .into_iter()
            .filter(|a| match color {
                Some(c) => a.color.as_deref().is_some_and(|ac| ac.contains(c)),
                None => true,
            })
            .filter(|a| make.map_or(true, |m| a.make.contains(m)))
            .collect())
    }

    async fn vin_exists(&self, vin: &str) -> Result<bool> {
        Ok(self.snapshot().iter().any(|a| a.vin == vin))
    }

    async fn insert(&self, auto: NewAutomobile) -> Result<Automobile> {
        Ok(self.push(auto))
    }

    async fn update(&self, auto: Automobile) -> Result<()> {
        let mut autos = self.autos.lock().unwrap();
        if let Some(slot) = autos.iter_mut().find(|a| a.id == auto.id) {
            *slot = auto;
        }
        Ok(())
    }

    async fn delete_by_vin(&self, vin: &str) -> Result<bool> {
        let mut autos = self.autos.lock().unwrap();
        let before = autos.len();
        autos.retain(|a| a.vin != vin);
        Ok(autos.len() < before)
    }
}

/// Repository whose every call fails, to drive the 500 path.
pub struct FailingAutosRepository;

#[async_trait::async_trait]
impl AutosRepository for FailingAutosRepository {
    async fn find_all(&self) -> Result<Vec<Automobile>> {
        anyhow::bail!("connection refused")
    }

    async fn find_by_id(&self, _id: i32) -> Result<Option<Automobile>> {
        anyhow::bail!("connection refused")
    }

    async fn find_by_vin(&self, _vin: &str) -> Result<Option<Automobile>> {
        anyhow::bail!("connection refused")
    }

    async fn find_by_filter(
        &self,
        _color: Option<&str>,
        _make: Option<&str>,
    ) -> Result<Vec<Automobile>> {
        anyhow::bail!("connection refused")
    }

    async fn vin_exists(&self, _vin: &str) -> Result<bool> {
        anyhow::bail!("connection refused")
    }

    async fn insert(&self, _auto: NewAutomobile) -> Result<Automobile> {
        anyhow::bail!("connection refused")
    }

    async fn update(&self, _auto: Automobile) -> Result<()> {
        anyhow::bail!("connection refused")
    }

    async fn delete_by_vin(&self, _vin: &str) -> Result<bool> {
        anyhow::bail!("connection refused")
    }
}

pub fn mustang() -> NewAutomobile {
    NewAutomobile::new(1967, "Ford", "Mustang", "AABBCC")
}

pub fn colored(year: i32, make: &str, model: &str, color: &str, vin: &str) -> NewAutomobile {
    NewAutomobile {
        color: Some(color.to_string()),
        ..NewAutomobile::new(year, make, model, vin)
    }
}

/// Five autos with distinct colors and makes.
pub fn fleet() -> Vec<NewAutomobile> {
    vec![
        colored(1967, "Ford", "Mustang", "RED", "VIN001"),
        colored(1972, "Ford", "Pinto", "GREEN", "VIN002"),
        colored(1985, "Toyota", "Corolla", "DARK RED", "VIN003"),
        colored(1999, "Honda", "Civic", "BLUE", "VIN004"),
        colored(2010, "Ford", "Focus", "BLUE", "VIN005"),
    ]
}

pub fn mock_service(autos: Vec<NewAutomobile>) -> (Arc<MockAutosRepository>, Service) {
    let repo = Arc::new(MockAutosRepository::with(autos));
    let service = Service::new(repo.clone());
    (repo, service)
}

/// Fresh in-memory SQLite database with the schema applied.
pub async fn create_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to test database");

    autos::AutosModule::migrate(&db)
        .await
        .expect("Failed to run migrations");

    db
}
