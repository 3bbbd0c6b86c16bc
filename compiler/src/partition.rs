use brine_enumer_schema::Member;
use crate::types::Run;

/// Splits declaration-ordered members into maximal runs of consecutive values.
///
/// A new run starts whenever a member's value is not exactly one more than
/// the previous member's. No members means no runs.
pub fn partition(members: &[Member]) -> Vec<Run<'_>> {
    let mut runs  = Vec::new();
    let mut start = 0;

    for i in 1..members.len() {
        let contiguous = members[i - 1]
            .value
            .checked_add(1)
            .is_some_and(|next| next == members[i].value);
        if !contiguous {
            runs.push(Run { members: &members[start..i] });
            start = i;
        }
    }

    if start < members.len() {
        runs.push(Run { members: &members[start..] });
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn members(values: &[i64]) -> Vec<Member> {
        values
            .iter()
            .map(|v| Member::new(&format!("V{}", v), &format!("v{}", v), *v))
            .collect()
    }

    fn values(runs: &[Run]) -> Vec<Vec<i64>> {
        runs.iter()
            .map(|r| r.members.iter().map(|m| m.value).collect())
            .collect()
    }

    #[test]
    fn splits_on_gaps() {
        let m = members(&[1, 2, 3, 10, 11]);
        assert_eq!(values(&partition(&m)), vec![vec![1, 2, 3], vec![10, 11]]);
    }

    #[test]
    fn empty_input_has_no_runs() {
        assert!(partition(&[]).is_empty());
    }

    #[test]
    fn single_member() {
        let m = members(&[7]);
        let runs = partition(&m);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].first_value(), Some(7));
        assert_eq!(runs[0].last_value(), Some(7));
    }

    #[test]
    fn declaration_order_not_sorted() {
        // Descending values never extend a run.
        let m = members(&[3, 2, 1]);
        assert_eq!(values(&partition(&m)), vec![vec![3], vec![2], vec![1]]);
    }

    #[test]
    fn negative_values_and_overflow() {
        let m = members(&[-2, -1, 0, i64::MAX, i64::MIN]);
        assert_eq!(
            values(&partition(&m)),
            vec![vec![-2, -1, 0], vec![i64::MAX], vec![i64::MIN]]
        );
    }

    #[test]
    fn runs_cover_every_member_in_order() {
        let m = members(&[0, 1, 5, 6, 7, 9, 20]);
        let runs = partition(&m);
        let flat: Vec<&Member> = runs.iter().flat_map(|r| r.members.iter()).collect();
        assert_eq!(flat, m.iter().collect::<Vec<_>>());
        assert!(runs.iter().all(|r| !r.is_empty()));
    }
}
