use crate::model::record::Record;

/// Recomputes every derived field from the record's current inputs. Never
/// fails, regardless of what the inputs hold.
///
/// The three rate fields depend only on basic salary; gross pay and total
/// deductions sum their input columns; net pay is computed last since it
/// depends on the other two.
///
/// Bonus, OT amount, and deductions are NOT derived from their rate
/// columns; they are independent inputs that merely sit next to the rates
/// in the grid.
pub fn recompute(record: &mut Record) {
    record.bonus_rate = record.basic_salary * 0.10;
    record.ot_rate = record.basic_salary / 160.0;
    record.deduction_rate = record.basic_salary * 0.05;

    record.gross_pay = record.basic_salary
        + record.incentive
        + record.special_bonus
        + record.bonus
        + record.business_trip_amount
        + record.ot_amount;

    record.total_deductions = record.social_insurance
        + record.advances
        + record.transportation_deductions
        + record.deductions;

    record.net_pay = record.gross_pay - record.total_deductions;
}
