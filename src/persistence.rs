//! MySQL persistence for the register: bulk load ordered by id, and an
//! all-or-nothing batch upsert keyed by id. Queries are bound at runtime so
//! the crate builds without a reachable database.

use sqlx::MySqlPool;

use crate::error::RegisterError;
use crate::model::record::{Record, Status};

/// Row shape of the `payroll_register` table. Status travels as text and is
/// parsed on the way out; unknown text maps to Pending.
#[derive(Debug, sqlx::FromRow)]
struct RecordRow {
    payment_date: chrono::NaiveDate,
    id: u64,
    employee_name: String,
    basic_salary: f64,
    incentive: f64,
    special_bonus: f64,
    number_of_bonuses: u32,
    bonus_rate: f64,
    bonus: f64,
    number_of_business_trips: u32,
    business_trip_amount: f64,
    ot_hours: f64,
    ot_rate: f64,
    ot_amount: f64,
    gross_pay: f64,
    social_insurance: f64,
    advances: f64,
    transportation_deductions: f64,
    number_of_deductions: u32,
    deduction_rate: f64,
    deductions: f64,
    total_deductions: f64,
    net_pay: f64,
    status: String,
}

impl From<RecordRow> for Record {
    fn from(row: RecordRow) -> Self {
        Record {
            payment_date: row.payment_date,
            id: row.id,
            employee_name: row.employee_name,
            basic_salary: row.basic_salary,
            incentive: row.incentive,
            special_bonus: row.special_bonus,
            number_of_bonuses: row.number_of_bonuses,
            bonus_rate: row.bonus_rate,
            bonus: row.bonus,
            number_of_business_trips: row.number_of_business_trips,
            business_trip_amount: row.business_trip_amount,
            ot_hours: row.ot_hours,
            ot_rate: row.ot_rate,
            ot_amount: row.ot_amount,
            gross_pay: row.gross_pay,
            social_insurance: row.social_insurance,
            advances: row.advances,
            transportation_deductions: row.transportation_deductions,
            number_of_deductions: row.number_of_deductions,
            deduction_rate: row.deduction_rate,
            deductions: row.deductions,
            total_deductions: row.total_deductions,
            net_pay: row.net_pay,
            status: row.status.parse().unwrap_or(Status::Pending),
        }
    }
}

const SELECT_ALL: &str = "\
    SELECT payment_date, id, employee_name, basic_salary, incentive, \
           special_bonus, number_of_bonuses, bonus_rate, bonus, \
           number_of_business_trips, business_trip_amount, ot_hours, ot_rate, \
           ot_amount, gross_pay, social_insurance, advances, \
           transportation_deductions, number_of_deductions, deduction_rate, \
           deductions, total_deductions, net_pay, status \
    FROM payroll_register \
    ORDER BY id";

const UPSERT: &str = "\
    INSERT INTO payroll_register \
        (payment_date, id, employee_name, basic_salary, incentive, \
         special_bonus, number_of_bonuses, bonus_rate, bonus, \
         number_of_business_trips, business_trip_amount, ot_hours, ot_rate, \
         ot_amount, gross_pay, social_insurance, advances, \
         transportation_deductions, number_of_deductions, deduction_rate, \
         deductions, total_deductions, net_pay, status) \
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
    ON DUPLICATE KEY UPDATE \
        employee_name = VALUES(employee_name), \
        basic_salary = VALUES(basic_salary), \
        incentive = VALUES(incentive), \
        special_bonus = VALUES(special_bonus), \
        number_of_bonuses = VALUES(number_of_bonuses), \
        bonus_rate = VALUES(bonus_rate), \
        bonus = VALUES(bonus), \
        number_of_business_trips = VALUES(number_of_business_trips), \
        business_trip_amount = VALUES(business_trip_amount), \
        ot_hours = VALUES(ot_hours), \
        ot_rate = VALUES(ot_rate), \
        ot_amount = VALUES(ot_amount), \
        gross_pay = VALUES(gross_pay), \
        social_insurance = VALUES(social_insurance), \
        advances = VALUES(advances), \
        transportation_deductions = VALUES(transportation_deductions), \
        number_of_deductions = VALUES(number_of_deductions), \
        deduction_rate = VALUES(deduction_rate), \
        deductions = VALUES(deductions), \
        total_deductions = VALUES(total_deductions), \
        net_pay = VALUES(net_pay), \
        status = VALUES(status)";

/// Loads the full register in id order.
pub async fn load_all(pool: &MySqlPool) -> Result<Vec<Record>, RegisterError> {
    let rows = sqlx::query_as::<_, RecordRow>(SELECT_ALL)
        .fetch_all(pool)
        .await?;
    Ok(rows.into_iter().map(Record::from).collect())
}

/// Upserts every record in one transaction and returns the number of rows
/// written. Any failure rolls the whole batch back, so a partial write is
/// never observable.
pub async fn save_all(pool: &MySqlPool, records: &[Record]) -> Result<usize, RegisterError> {
    let mut tx = pool.begin().await?;

    for record in records {
        sqlx::query(UPSERT)
            .bind(record.payment_date)
            .bind(record.id)
            .bind(&record.employee_name)
            .bind(record.basic_salary)
            .bind(record.incentive)
            .bind(record.special_bonus)
            .bind(record.number_of_bonuses)
            .bind(record.bonus_rate)
            .bind(record.bonus)
            .bind(record.number_of_business_trips)
            .bind(record.business_trip_amount)
            .bind(record.ot_hours)
            .bind(record.ot_rate)
            .bind(record.ot_amount)
            .bind(record.gross_pay)
            .bind(record.social_insurance)
            .bind(record.advances)
            .bind(record.transportation_deductions)
            .bind(record.number_of_deductions)
            .bind(record.deduction_rate)
            .bind(record.deductions)
            .bind(record.total_deductions)
            .bind(record.net_pay)
            .bind(record.status.to_string())
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    Ok(records.len())
}
