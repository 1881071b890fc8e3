use crate::model::record::Record;

/// Narrows the register to the rows matching every supplied query, keeping
/// the original order.
///
/// Each query is a case-insensitive substring match; an empty (or
/// whitespace-only) query matches everything. The general query looks at
/// every display column, the id query only at the stringified id, and the
/// date query only at the formatted payment date. The three predicates are
/// ANDed.
pub fn filter_records<'a>(
    records: &'a [Record],
    general: &str,
    id_query: &str,
    date_query: &str,
) -> Vec<&'a Record> {
    let general = general.trim().to_lowercase();
    let id_query = id_query.trim().to_lowercase();
    let date_query = date_query.trim().to_lowercase();

    records
        .iter()
        .filter(|record| {
            let general_hit = general.is_empty()
                || record
                    .display_values()
                    .join(" ")
                    .to_lowercase()
                    .contains(&general);
            let id_hit = id_query.is_empty() || record.id.to_string().contains(&id_query);
            let date_hit =
                date_query.is_empty() || record.payment_date.to_string().contains(&date_query);

            general_hit && id_hit && date_hit
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record::sample_records;
    use crate::register::Register;

    fn records() -> Vec<Record> {
        // Seed rows, normalized the same way the register loads them.
        Register::from_records(sample_records()).all().to_vec()
    }

    #[test]
    fn empty_queries_match_everything_in_order() {
        let records = records();
        let hits = filter_records(&records, "", "", "");

        assert_eq!(hits.len(), 5);
        let ids: Vec<u64> = hits.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn general_query_is_a_case_insensitive_substring_match() {
        let records = records();

        let hits = filter_records(&records, "Ahmed", "", "");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].employee_name, "Ahmed Hassan");

        let hits = filter_records(&records, "ahmed", "", "");
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn general_query_sees_every_display_column() {
        let records = records();

        // 6000.00 only appears in Mohamed Ali's basic salary column.
        let hits = filter_records(&records, "6000.00", "", "");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 3);
    }

    #[test]
    fn id_query_matches_only_the_id_column() {
        let records = records();

        // "5" as a general query would also hit salary digits; as an id
        // query it must only match record 5.
        let hits = filter_records(&records, "", "5", "");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 5);
    }

    #[test]
    fn date_query_matches_only_the_payment_date() {
        let records = records();

        let hits = filter_records(&records, "", "", "2024-01");
        assert_eq!(hits.len(), 5);

        let hits = filter_records(&records, "", "", "2025");
        assert!(hits.is_empty());
    }

    #[test]
    fn supplied_queries_are_anded() {
        let records = records();

        let hits = filter_records(&records, "sarah", "2", "2024-01-15");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].employee_name, "Sarah Johnson");

        let hits = filter_records(&records, "sarah", "3", "2024-01-15");
        assert!(hits.is_empty());
    }
}
