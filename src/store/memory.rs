//! In-memory employee store.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::model::{Employee, NewEmployee};
use crate::observability::metrics;
use crate::store::{EmployeeStore, StoreResult};

/// A thread-safe employee store backed by a sharded map.
///
/// Cloning is cheap and clones share the same records.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    employees: Arc<DashMap<Uuid, Employee>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the two example employees.
    pub fn seeded() -> Self {
        let store = Self::new();
        let now = Utc::now();

        let seeds = [
            (
                NewEmployee::new("Johnny", "Appleseed")
                    .with_job_title("Principal Software Engineer")
                    .with_salary(124_000)
                    .with_age(29),
                now - Duration::days(2 * 365),
            ),
            (
                NewEmployee::new("Rahul", "Gupta")
                    .with_job_title("IT Director")
                    .with_salary(167_000)
                    .with_age(39),
                now - Duration::days(5 * 365),
            ),
        ];

        for (new, hired_at) in seeds {
            store.insert(new, hired_at);
        }

        tracing::info!(count = store.employees.len(), "Seeded employee store");
        store
    }

    fn insert(&self, new: NewEmployee, hired_at: DateTime<Utc>) -> Employee {
        // v4 collisions are not a practical concern, but never overwrite.
        let mut id = Uuid::new_v4();
        while self.employees.contains_key(&id) {
            id = Uuid::new_v4();
        }
        let employee = new.into_employee(id, hired_at);

        self.employees.insert(employee.uuid, employee.clone());
        metrics::record_store_size(self.employees.len());
        employee
    }
}

impl EmployeeStore for InMemoryStore {
    fn list_all(&self) -> StoreResult<Vec<Employee>> {
        let mut all: Vec<Employee> = self
            .employees
            .iter()
            .map(|r| r.value().clone())
            .collect();
        // Map iteration order is unspecified; sort so repeated reads agree.
        all.sort_by(|a, b| {
            a.contract_hire_date
                .cmp(&b.contract_hire_date)
                .then_with(|| a.uuid.cmp(&b.uuid))
        });
        Ok(all)
    }

    fn get_by_id(&self, id: Uuid) -> StoreResult<Option<Employee>> {
        Ok(self.employees.get(&id).map(|r| r.value().clone()))
    }

    fn create(&self, employee: NewEmployee) -> StoreResult<Employee> {
        Ok(self.insert(employee, Utc::now()))
    }

    fn len(&self) -> usize {
        self.employees.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seeded_store() {
        let store = InMemoryStore::seeded();
        let all = store.list_all().unwrap();
        assert_eq!(all.len(), 2);

        let names: HashSet<_> = all.iter().filter_map(|e| e.full_name.clone()).collect();
        assert!(names.contains("Johnny Appleseed"));
        assert!(names.contains("Rahul Gupta"));

        assert_ne!(all[0].uuid, all[1].uuid);
        assert_ne!(all[0].contract_hire_date, all[1].contract_hire_date);
        assert!(all.iter().all(|e| e.age.is_some() && e.salary.is_some()));
    }

    #[test]
    fn test_empty_store() {
        let store = InMemoryStore::new();
        assert!(store.is_empty());
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_create_and_get() {
        let store = InMemoryStore::new();
        let before = Utc::now();
        let created = store
            .create(NewEmployee::new("John", "Doe").with_salary(120_000))
            .unwrap();

        assert!(!created.uuid.is_nil());
        assert!(created.contract_hire_date >= before);
        assert_eq!(created.full_name.as_deref(), Some("John Doe"));

        let fetched = store.get_by_id(created.uuid).unwrap().expect("Employee not found");
        assert_eq!(fetched, created);
    }

    #[test]
    fn test_get_missing() {
        let store = InMemoryStore::seeded();
        assert!(store.get_by_id(Uuid::new_v4()).unwrap().is_none());
    }

    #[test]
    fn test_identifiers_unique() {
        let store = InMemoryStore::new();
        let ids: HashSet<_> = (0..500)
            .map(|i| store.create(NewEmployee::new(format!("First{i}"), "Last")).unwrap().uuid)
            .collect();
        assert_eq!(ids.len(), 500);
        assert_eq!(store.len(), 500);
    }

    #[test]
    fn test_list_is_stable() {
        let store = InMemoryStore::seeded();
        store.create(NewEmployee::new("Jane", "Smith")).unwrap();

        let first = store.list_all().unwrap();
        let second = store.list_all().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_clones_share_records() {
        let store = InMemoryStore::new();
        let other = store.clone();
        let created = store.create(NewEmployee::new("Jane", "Smith")).unwrap();
        assert!(other.get_by_id(created.uuid).unwrap().is_some());
    }

    #[tokio::test]
    async fn test_concurrent_creates() {
        let store = InMemoryStore::new();
        let mut handles = Vec::new();
        for t in 0..8 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                for i in 0..50 {
                    store
                        .create(NewEmployee::new(format!("T{t}"), format!("N{i}")))
                        .unwrap();
                }
            }));
        }
        for h in handles {
            h.await.unwrap();
        }
        assert_eq!(store.len(), 400);
    }
}
