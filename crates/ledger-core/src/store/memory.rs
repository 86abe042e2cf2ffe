//! In-memory store for workflow unit tests.
//!
//! Counts shipment lookups, calculation saves and calculation deletes so
//! tests can assert that a rejected request never reached storage.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{CalculationStore, LedgerStore, ShipmentStore};
use crate::error::{CoreError, CoreResult};
use crate::types::{
    Calculation, CalculationId, Cost, Income, NewCalculation, Shipment, ShipmentId,
};

#[derive(Default)]
struct Tables {
    next_id: i64,
    shipments: BTreeMap<ShipmentId, Shipment>,
    calculations: BTreeMap<CalculationId, Calculation>,
    incomes: Vec<Income>,
    costs: Vec<Cost>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
pub(crate) struct MemoryStore {
    tables: Mutex<Tables>,
    shipment_lookups: AtomicUsize,
    calculation_saves: AtomicUsize,
    calculation_deletes: AtomicUsize,
    broken: bool,
}

impl MemoryStore {
    pub(crate) fn new() -> Self {
        MemoryStore::default()
    }

    /// A store whose every call fails with a storage error.
    pub(crate) fn broken() -> Self {
        MemoryStore {
            broken: true,
            ..MemoryStore::default()
        }
    }

    pub(crate) fn add_income(&self, shipment_id: ShipmentId, amount: f64) {
        let mut tables = self.tables.lock().unwrap();
        let id = tables.next_id();
        tables.incomes.push(Income {
            id,
            shipment_id,
            amount,
        });
    }

    pub(crate) fn add_cost(&self, shipment_id: ShipmentId, amount: f64) {
        let mut tables = self.tables.lock().unwrap();
        let id = tables.next_id();
        tables.costs.push(Cost {
            id,
            shipment_id,
            amount,
        });
    }

    pub(crate) fn calculation_count(&self) -> usize {
        self.tables.lock().unwrap().calculations.len()
    }

    pub(crate) fn shipment_lookups(&self) -> usize {
        self.shipment_lookups.load(Ordering::SeqCst)
    }

    pub(crate) fn calculation_saves(&self) -> usize {
        self.calculation_saves.load(Ordering::SeqCst)
    }

    pub(crate) fn calculation_deletes(&self) -> usize {
        self.calculation_deletes.load(Ordering::SeqCst)
    }

    fn check(&self) -> CoreResult<()> {
        if self.broken {
            return Err(CoreError::storage("store unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl ShipmentStore for MemoryStore {
    async fn find_all(&self) -> CoreResult<Vec<Shipment>> {
        self.check()?;
        Ok(self.tables.lock().unwrap().shipments.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ShipmentId) -> CoreResult<Option<Shipment>> {
        self.shipment_lookups.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.tables.lock().unwrap().shipments.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: ShipmentId) -> CoreResult<bool> {
        self.shipment_lookups.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.tables.lock().unwrap().shipments.contains_key(&id))
    }

    async fn save(&self) -> CoreResult<Shipment> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        let shipment = Shipment { id: tables.next_id() };
        tables.shipments.insert(shipment.id, shipment.clone());
        Ok(shipment)
    }

    async fn delete_by_id(&self, id: ShipmentId) -> CoreResult<bool> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        tables.calculations.retain(|_, c| c.shipment_id != id);
        Ok(tables.shipments.remove(&id).is_some())
    }
}

#[async_trait]
impl CalculationStore for MemoryStore {
    async fn find_by_id(&self, id: CalculationId) -> CoreResult<Option<Calculation>> {
        self.check()?;
        Ok(self.tables.lock().unwrap().calculations.get(&id).cloned())
    }

    async fn find_by_shipment(&self, shipment_id: ShipmentId) -> CoreResult<Vec<Calculation>> {
        self.check()?;
        Ok(self
            .tables
            .lock()
            .unwrap()
            .calculations
            .values()
            .filter(|c| c.shipment_id == shipment_id)
            .cloned()
            .collect())
    }

    async fn save(&self, calculation: NewCalculation) -> CoreResult<Calculation> {
        self.calculation_saves.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        let saved = Calculation {
            id: tables.next_id(),
            shipment_id: calculation.shipment_id,
            income: calculation.income,
            cost: calculation.cost,
            profit_or_loss: calculation.profit_or_loss,
        };
        tables.calculations.insert(saved.id, saved.clone());
        Ok(saved)
    }

    async fn delete_by_id(&self, id: CalculationId) -> CoreResult<bool> {
        self.calculation_deletes.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.tables.lock().unwrap().calculations.remove(&id).is_some())
    }
}

#[async_trait]
impl LedgerStore for MemoryStore {
    async fn incomes_for_shipment(&self, shipment_id: ShipmentId) -> CoreResult<Vec<Income>> {
        self.check()?;
        Ok(self
            .tables
            .lock()
            .unwrap()
            .incomes
            .iter()
            .filter(|i| i.shipment_id == shipment_id)
            .cloned()
            .collect())
    }

    async fn costs_for_shipment(&self, shipment_id: ShipmentId) -> CoreResult<Vec<Cost>> {
        self.check()?;
        Ok(self
            .tables
            .lock()
            .unwrap()
            .costs
            .iter()
            .filter(|c| c.shipment_id == shipment_id)
            .cloned()
            .collect())
    }
}
