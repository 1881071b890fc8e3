use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

use super::record::{Record, Status};

/// The user-editable register columns.
///
/// Derived columns (bonus rate, OT rate, deduction rate, gross pay, total
/// deductions, net pay) are deliberately absent: they are recomputed after
/// every edit and can never be written directly. `PaymentDate` is listed so
/// it can be named in requests, but the store rejects writes to it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, EnumString,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum EditableField {
    PaymentDate,
    EmployeeName,
    BasicSalary,
    Incentive,
    SpecialBonus,
    NumberOfBonuses,
    Bonus,
    NumberOfBusinessTrips,
    BusinessTripAmount,
    OtHours,
    OtAmount,
    SocialInsurance,
    Advances,
    TransportationDeductions,
    NumberOfDeductions,
    Deductions,
    Status,
}

impl EditableField {
    /// Writes `raw` into the record. Numeric parsing is forgiving: empty or
    /// malformed input becomes 0 rather than failing the edit, and unknown
    /// status text falls back to Pending.
    pub fn apply(self, record: &mut Record, raw: &str) {
        match self {
            // Write-once; set_field rejects it before reaching here.
            EditableField::PaymentDate => {}
            EditableField::EmployeeName => record.employee_name = raw.to_string(),
            EditableField::BasicSalary => record.basic_salary = parse_amount(raw),
            EditableField::Incentive => record.incentive = parse_amount(raw),
            EditableField::SpecialBonus => record.special_bonus = parse_amount(raw),
            EditableField::NumberOfBonuses => record.number_of_bonuses = parse_count(raw),
            EditableField::Bonus => record.bonus = parse_amount(raw),
            EditableField::NumberOfBusinessTrips => {
                record.number_of_business_trips = parse_count(raw)
            }
            EditableField::BusinessTripAmount => record.business_trip_amount = parse_amount(raw),
            EditableField::OtHours => record.ot_hours = parse_amount(raw),
            EditableField::OtAmount => record.ot_amount = parse_amount(raw),
            EditableField::SocialInsurance => record.social_insurance = parse_amount(raw),
            EditableField::Advances => record.advances = parse_amount(raw),
            EditableField::TransportationDeductions => {
                record.transportation_deductions = parse_amount(raw)
            }
            EditableField::NumberOfDeductions => record.number_of_deductions = parse_count(raw),
            EditableField::Deductions => record.deductions = parse_amount(raw),
            EditableField::Status => {
                record.status = raw.trim().parse().unwrap_or(Status::Pending)
            }
        }
    }

    /// The current value of this column as raw text, precise enough to be
    /// replayed through `apply` by the undo path.
    pub fn current_value(self, record: &Record) -> String {
        match self {
            EditableField::PaymentDate => record.payment_date.to_string(),
            EditableField::EmployeeName => record.employee_name.clone(),
            EditableField::BasicSalary => record.basic_salary.to_string(),
            EditableField::Incentive => record.incentive.to_string(),
            EditableField::SpecialBonus => record.special_bonus.to_string(),
            EditableField::NumberOfBonuses => record.number_of_bonuses.to_string(),
            EditableField::Bonus => record.bonus.to_string(),
            EditableField::NumberOfBusinessTrips => record.number_of_business_trips.to_string(),
            EditableField::BusinessTripAmount => record.business_trip_amount.to_string(),
            EditableField::OtHours => record.ot_hours.to_string(),
            EditableField::OtAmount => record.ot_amount.to_string(),
            EditableField::SocialInsurance => record.social_insurance.to_string(),
            EditableField::Advances => record.advances.to_string(),
            EditableField::TransportationDeductions => {
                record.transportation_deductions.to_string()
            }
            EditableField::NumberOfDeductions => record.number_of_deductions.to_string(),
            EditableField::Deductions => record.deductions.to_string(),
            EditableField::Status => record.status.to_string(),
        }
    }
}

fn parse_amount(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

fn parse_count(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}
