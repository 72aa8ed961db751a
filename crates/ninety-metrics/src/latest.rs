//! Latest-filing selection.

use ninety_model::ReturnRecord;

/// Pick the most recently filed return from a filing history.
///
/// Returns a borrow of the winning element, so the caller can tell which
/// record won (identity-preserving). An empty history yields `None`, which
/// is distinct from a return whose fields are all null.
///
/// The fold runs left to right and replaces the running candidate only when
/// a challenger's `filed_on` parses to a strictly greater calendar date.
/// Equal dates and unparseable challengers keep the earlier-encountered
/// record, so ties break first-wins and the result is deterministic for a
/// given input order. The input is never reordered or mutated.
pub fn latest(records: &[ReturnRecord]) -> Option<&ReturnRecord> {
    let mut iter = records.iter();
    let mut candidate = iter.next()?;
    let mut candidate_date = candidate.filed_date();

    for challenger in iter {
        let challenger_date = challenger.filed_date();
        if let (Some(challenger_date), Some(candidate_date_parsed)) =
            (challenger_date, candidate_date)
            && challenger_date > candidate_date_parsed
        {
            candidate = challenger;
            candidate_date = Some(challenger_date);
        }
    }

    Some(candidate)
}
