use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

/// Labels of the 24 register columns, in grid order. Shared by the
/// filter engine and the report writer.
pub const COLUMN_LABELS: [&str; 24] = [
    "Payment Date",
    "ID",
    "Employee Name",
    "Basic Salary",
    "Incentive",
    "Special Bonus",
    "Number of Bonuses",
    "Bonus Rate",
    "Bonus",
    "Number of Business Trips",
    "Business Trip Amount",
    "OT Hours",
    "OT Rate",
    "OT Amount",
    "Gross Pay",
    "Social Insurance",
    "Advances",
    "Transportation Deductions",
    "Number of Deductions",
    "Deduction Rate",
    "Deductions",
    "Total Deductions",
    "Net Pay",
    "Status",
];

/// Record lifecycle state. New rows start Pending; a successful submit
/// marks rows Active, a failed submit marks them Failed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema, Display, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Status {
    #[default]
    Pending,
    Active,
    Failed,
}

/// One payroll entry for one employee on one payment date.
///
/// The six derived fields (bonus_rate, ot_rate, deduction_rate, gross_pay,
/// total_deductions, net_pay) are owned by the calculation engine and are
/// overwritten after every mutation; callers never set them directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "payment_date": "2024-01-15",
        "id": 1,
        "employee_name": "Ahmed Hassan",
        "basic_salary": 5000.0,
        "incentive": 500.0,
        "special_bonus": 200.0,
        "number_of_bonuses": 2,
        "bonus_rate": 500.0,
        "bonus": 700.0,
        "number_of_business_trips": 1,
        "business_trip_amount": 150.0,
        "ot_hours": 10.0,
        "ot_rate": 31.25,
        "ot_amount": 250.0,
        "gross_pay": 6800.0,
        "social_insurance": 300.0,
        "advances": 100.0,
        "transportation_deductions": 50.0,
        "number_of_deductions": 1,
        "deduction_rate": 250.0,
        "deductions": 250.0,
        "total_deductions": 700.0,
        "net_pay": 6100.0,
        "status": "Active"
    })
)]
pub struct Record {
    /// Write-once; assigned when the row is created and rejected by
    /// `set_field` afterwards.
    #[schema(value_type = String, format = "date")]
    pub payment_date: NaiveDate,
    pub id: u64,
    pub employee_name: String,
    pub basic_salary: f64,
    pub incentive: f64,
    pub special_bonus: f64,
    pub number_of_bonuses: u32,
    pub bonus_rate: f64,
    pub bonus: f64,
    pub number_of_business_trips: u32,
    pub business_trip_amount: f64,
    pub ot_hours: f64,
    pub ot_rate: f64,
    pub ot_amount: f64,
    pub gross_pay: f64,
    pub social_insurance: f64,
    pub advances: f64,
    pub transportation_deductions: f64,
    pub number_of_deductions: u32,
    pub deduction_rate: f64,
    pub deductions: f64,
    pub total_deductions: f64,
    pub net_pay: f64,
    pub status: Status,
}

impl Record {
    /// A blank row: Pending status, empty name, every numeric field zero.
    pub fn new_row(id: u64, payment_date: NaiveDate) -> Self {
        Record {
            payment_date,
            id,
            employee_name: String::new(),
            basic_salary: 0.0,
            incentive: 0.0,
            special_bonus: 0.0,
            number_of_bonuses: 0,
            bonus_rate: 0.0,
            bonus: 0.0,
            number_of_business_trips: 0,
            business_trip_amount: 0.0,
            ot_hours: 0.0,
            ot_rate: 0.0,
            ot_amount: 0.0,
            gross_pay: 0.0,
            social_insurance: 0.0,
            advances: 0.0,
            transportation_deductions: 0.0,
            number_of_deductions: 0,
            deduction_rate: 0.0,
            deductions: 0.0,
            total_deductions: 0.0,
            net_pay: 0.0,
            status: Status::Pending,
        }
    }

    /// The 24 display column values in grid order. Amounts render with two
    /// decimals, counts as integers, the date as YYYY-MM-DD.
    pub fn display_values(&self) -> Vec<String> {
        fn amount(value: f64) -> String {
            format!("{value:.2}")
        }

        vec![
            self.payment_date.to_string(),
            self.id.to_string(),
            self.employee_name.clone(),
            amount(self.basic_salary),
            amount(self.incentive),
            amount(self.special_bonus),
            self.number_of_bonuses.to_string(),
            amount(self.bonus_rate),
            amount(self.bonus),
            self.number_of_business_trips.to_string(),
            amount(self.business_trip_amount),
            amount(self.ot_hours),
            amount(self.ot_rate),
            amount(self.ot_amount),
            amount(self.gross_pay),
            amount(self.social_insurance),
            amount(self.advances),
            amount(self.transportation_deductions),
            self.number_of_deductions.to_string(),
            amount(self.deduction_rate),
            amount(self.deductions),
            amount(self.total_deductions),
            amount(self.net_pay),
            self.status.to_string(),
        ]
    }
}

/// Seed rows shown when no database is reachable or the table is empty.
/// Only the raw inputs matter here; the register recomputes the derived
/// fields on every bulk load.
static SAMPLE_ROWS: Lazy<Vec<Record>> = Lazy::new(|| {
    let date = NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid sample payment date");

    // (id, name, basic, incentive, special, n_bonuses, bonus, n_trips,
    //  trip_amount, ot_hours, ot_amount, social, advances, transport,
    //  n_deductions, deductions)
    let seeds = [
        (1, "Ahmed Hassan", 5000.0, 500.0, 200.0, 2, 700.0, 1, 150.0, 10.0, 250.0, 300.0, 100.0, 50.0, 1, 250.0),
        (2, "Sarah Johnson", 4500.0, 300.0, 150.0, 1, 360.0, 2, 200.0, 8.0, 240.0, 270.0, 150.0, 75.0, 2, 270.0),
        (3, "Mohamed Ali", 6000.0, 600.0, 300.0, 3, 900.0, 0, 0.0, 15.0, 525.0, 360.0, 200.0, 100.0, 1, 240.0),
        (4, "Lisa Chen", 5500.0, 400.0, 250.0, 2, 495.0, 1, 120.0, 12.0, 336.0, 330.0, 80.0, 60.0, 2, 275.0),
        (5, "Omar Khalil", 4800.0, 350.0, 180.0, 1, 336.0, 3, 300.0, 6.0, 192.0, 288.0, 120.0, 90.0, 1, 288.0),
    ];

    seeds
        .iter()
        .map(
            |&(
                id,
                name,
                basic_salary,
                incentive,
                special_bonus,
                number_of_bonuses,
                bonus,
                number_of_business_trips,
                business_trip_amount,
                ot_hours,
                ot_amount,
                social_insurance,
                advances,
                transportation_deductions,
                number_of_deductions,
                deductions,
            )| {
                let mut record = Record::new_row(id, date);
                record.employee_name = name.to_string();
                record.basic_salary = basic_salary;
                record.incentive = incentive;
                record.special_bonus = special_bonus;
                record.number_of_bonuses = number_of_bonuses;
                record.bonus = bonus;
                record.number_of_business_trips = number_of_business_trips;
                record.business_trip_amount = business_trip_amount;
                record.ot_hours = ot_hours;
                record.ot_amount = ot_amount;
                record.social_insurance = social_insurance;
                record.advances = advances;
                record.transportation_deductions = transportation_deductions;
                record.number_of_deductions = number_of_deductions;
                record.deductions = deductions;
                record.status = Status::Active;
                record
            },
        )
        .collect()
});

pub fn sample_records() -> Vec<Record> {
    SAMPLE_ROWS.clone()
}
