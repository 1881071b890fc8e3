//! The in-memory payroll register: an ordered, id-keyed collection of
//! records plus the edit history that backs undo. All mutation funnels
//! through [`Register::set_field`] so derived fields can never go stale.

pub mod calc;
pub mod filter;
pub mod stats;

use chrono::Local;

use crate::error::RegisterError;
use crate::model::field::EditableField;
use crate::model::record::{Record, Status};

/// One recorded edit: enough to put the old value back.
#[derive(Debug, Clone, PartialEq)]
pub struct EditEntry {
    pub id: u64,
    pub field: EditableField,
    pub previous: String,
}

#[derive(Debug, Default)]
pub struct Register {
    records: Vec<Record>,
    history: Vec<EditEntry>,
}

impl Register {
    pub fn new() -> Self {
        Register::default()
    }

    /// Bulk-loads `records` and recomputes each of them, so stale derived
    /// values coming from the database (or seed data) are normalized on the
    /// way in. Clears the edit history.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut register = Register::new();
        register.replace_all(records);
        register
    }

    /// Ordered snapshot of the register, insertion order preserved.
    pub fn all(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, id: u64) -> Result<&Record, RegisterError> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .ok_or(RegisterError::NotFound(id))
    }

    /// Appends `record` under the next free id (one past the highest
    /// existing id, 1 for an empty register; gaps are never reused),
    /// overwriting whatever id the caller put on it. Recomputes the derived
    /// columns on the way in. Never fails.
    pub fn add(&mut self, mut record: Record) -> u64 {
        let id = self.records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        record.id = id;
        calc::recompute(&mut record);
        self.records.push(record);
        id
    }

    /// Appends a blank row dated today.
    pub fn add_row(&mut self) -> &Record {
        self.add(Record::new_row(0, Local::now().date_naive()));
        let idx = self.records.len() - 1;
        &self.records[idx]
    }

    /// Parses `raw` into `field` on record `id`, recording the pre-edit
    /// value for undo and recomputing the derived columns afterwards.
    ///
    /// The payment date is write-once and always rejected here; malformed
    /// numeric input coerces to zero instead of failing.
    pub fn set_field(
        &mut self,
        id: u64,
        field: EditableField,
        raw: &str,
    ) -> Result<&Record, RegisterError> {
        let idx = self
            .index_of(id)
            .ok_or(RegisterError::NotFound(id))?;

        if field == EditableField::PaymentDate {
            return Err(RegisterError::ImmutableField(field));
        }

        let previous = field.current_value(&self.records[idx]);
        self.history.push(EditEntry { id, field, previous });
        Self::apply(&mut self.records[idx], field, raw);
        Ok(&self.records[idx])
    }

    /// Pops the most recent edit and replays its old value through the same
    /// apply path as `set_field`, so derived fields end up consistent with
    /// the restored input. Nothing new is recorded: repeated undos walk
    /// further back instead of ping-ponging. `None` means empty history.
    pub fn undo_last(&mut self) -> Option<(u64, EditableField)> {
        let entry = self.history.pop()?;
        let idx = self.index_of(entry.id)?;
        Self::apply(&mut self.records[idx], entry.field, &entry.previous);
        Some((entry.id, entry.field))
    }

    /// Replaces the whole register (refresh/import). Every incoming record
    /// is recomputed and the edit history is cleared.
    pub fn replace_all(&mut self, mut records: Vec<Record>) {
        for record in &mut records {
            calc::recompute(record);
        }
        self.records = records;
        self.history.clear();
    }

    /// Lifecycle transition applied by submit to every row at once. Not an
    /// edit: it bypasses the history, so undo never reverts a submit.
    pub fn mark_all(&mut self, status: Status) {
        for record in &mut self.records {
            record.status = status;
        }
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    fn index_of(&self, id: u64) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    fn apply(record: &mut Record, field: EditableField, raw: &str) {
        field.apply(record, raw);
        calc::recompute(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(id: u64) -> Record {
        Record::new_row(id, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
    }

    fn register_with_ids(ids: &[u64]) -> Register {
        Register::from_records(ids.iter().map(|&id| row(id)).collect())
    }

    #[test]
    fn add_row_assigns_one_past_the_highest_id() {
        let mut register = register_with_ids(&[1, 3, 5]);
        let record = register.add_row();

        assert_eq!(record.id, 6);
        assert_eq!(record.status, Status::Pending);
        assert_eq!(record.employee_name, "");
        assert_eq!(record.basic_salary, 0.0);
        assert_eq!(record.net_pay, 0.0);
    }

    #[test]
    fn add_row_on_an_empty_register_starts_at_one() {
        let mut register = Register::new();
        assert_eq!(register.add_row().id, 1);
        assert_eq!(register.add_row().id, 2);
    }

    #[test]
    fn add_overwrites_the_caller_id_and_recomputes() {
        let mut register = register_with_ids(&[4]);

        let mut imported = row(99);
        imported.basic_salary = 3000.0;
        let id = register.add(imported);

        assert_eq!(id, 5);
        let record = register.get(5).unwrap();
        assert_eq!(record.bonus_rate, 300.0);
        assert_eq!(record.net_pay, 3000.0);
    }

    #[test]
    fn set_field_keeps_derived_columns_consistent() {
        let mut register = register_with_ids(&[1]);

        register.set_field(1, EditableField::BasicSalary, "5000").unwrap();
        register.set_field(1, EditableField::Incentive, "500").unwrap();
        register.set_field(1, EditableField::SpecialBonus, "200").unwrap();
        register.set_field(1, EditableField::Bonus, "700").unwrap();
        register
            .set_field(1, EditableField::BusinessTripAmount, "150")
            .unwrap();
        register.set_field(1, EditableField::OtAmount, "250").unwrap();
        register
            .set_field(1, EditableField::SocialInsurance, "300")
            .unwrap();
        register.set_field(1, EditableField::Advances, "100").unwrap();
        register
            .set_field(1, EditableField::TransportationDeductions, "50")
            .unwrap();
        let record = register
            .set_field(1, EditableField::Deductions, "250")
            .unwrap();

        assert_eq!(record.bonus_rate, 500.0);
        assert_eq!(record.ot_rate, 31.25);
        assert_eq!(record.deduction_rate, 250.0);
        assert_eq!(record.gross_pay, 6800.0);
        assert_eq!(record.total_deductions, 700.0);
        assert_eq!(record.net_pay, 6100.0);
    }

    #[test]
    fn every_input_edit_triggers_recompute_not_just_basic_salary() {
        let mut register = register_with_ids(&[1]);
        register.set_field(1, EditableField::BasicSalary, "1000").unwrap();

        let record = register.set_field(1, EditableField::Advances, "40").unwrap();

        assert_eq!(record.total_deductions, 40.0);
        assert_eq!(record.net_pay, 960.0);
    }

    #[test]
    fn malformed_numeric_input_coerces_to_zero() {
        let mut register = register_with_ids(&[1]);
        register.set_field(1, EditableField::BasicSalary, "4000").unwrap();

        let record = register
            .set_field(1, EditableField::BasicSalary, "four thousand")
            .unwrap();

        assert_eq!(record.basic_salary, 0.0);
        assert_eq!(record.gross_pay, 0.0);
    }

    #[test]
    fn payment_date_is_write_once() {
        let mut register = register_with_ids(&[1]);
        let before = register.get(1).unwrap().payment_date;

        let err = register
            .set_field(1, EditableField::PaymentDate, "2030-12-31")
            .unwrap_err();

        assert!(matches!(err, RegisterError::ImmutableField(_)));
        assert_eq!(register.get(1).unwrap().payment_date, before);
        assert_eq!(register.history_len(), 0);
    }

    #[test]
    fn unknown_id_reports_not_found() {
        let mut register = register_with_ids(&[1]);

        assert!(matches!(
            register.set_field(9, EditableField::Bonus, "5"),
            Err(RegisterError::NotFound(9))
        ));
        assert!(matches!(register.get(9), Err(RegisterError::NotFound(9))));
    }

    #[test]
    fn undo_restores_the_value_and_the_derived_state() {
        let mut register = register_with_ids(&[1]);
        register.set_field(1, EditableField::BasicSalary, "5000").unwrap();

        register.set_field(1, EditableField::BasicSalary, "8000").unwrap();
        let undone = register.undo_last();

        assert_eq!(undone, Some((1, EditableField::BasicSalary)));
        let record = register.get(1).unwrap();
        assert_eq!(record.basic_salary, 5000.0);
        assert_eq!(record.bonus_rate, 500.0);
        assert_eq!(record.gross_pay, 5000.0);
    }

    #[test]
    fn sequential_undos_walk_backwards() {
        let mut register = register_with_ids(&[1]);
        register.set_field(1, EditableField::EmployeeName, "a").unwrap();
        register.set_field(1, EditableField::EmployeeName, "ab").unwrap();
        register.set_field(1, EditableField::EmployeeName, "abc").unwrap();

        register.undo_last();
        assert_eq!(register.get(1).unwrap().employee_name, "ab");
        register.undo_last();
        assert_eq!(register.get(1).unwrap().employee_name, "a");
        register.undo_last();
        assert_eq!(register.get(1).unwrap().employee_name, "");
        assert_eq!(register.undo_last(), None);
    }

    #[test]
    fn undo_on_empty_history_returns_none() {
        let mut register = register_with_ids(&[1]);
        assert_eq!(register.undo_last(), None);
    }

    #[test]
    fn replace_all_recomputes_and_clears_history() {
        let mut register = register_with_ids(&[1]);
        register.set_field(1, EditableField::Bonus, "10").unwrap();
        assert_eq!(register.history_len(), 1);

        let mut stale = row(7);
        stale.basic_salary = 2000.0;
        stale.gross_pay = 12345.0; // stale, must be recomputed on load
        register.replace_all(vec![stale]);

        assert_eq!(register.history_len(), 0);
        let record = register.get(7).unwrap();
        assert_eq!(record.gross_pay, 2000.0);
        assert_eq!(record.bonus_rate, 200.0);
    }

    #[test]
    fn mark_all_bypasses_the_history() {
        let mut register = register_with_ids(&[1, 2]);
        register.mark_all(Status::Active);

        assert!(register.all().iter().all(|r| r.status == Status::Active));
        assert_eq!(register.undo_last(), None);
    }

    #[test]
    fn status_edits_go_through_set_field() {
        let mut register = register_with_ids(&[1]);

        let record = register.set_field(1, EditableField::Status, "active").unwrap();
        assert_eq!(record.status, Status::Active);

        register.undo_last();
        assert_eq!(register.get(1).unwrap().status, Status::Pending);
    }
}
