//! Record predicates.
//!
//! Each criterion is a pass-through when set to `all` (or, for search, when
//! blank). Criteria are ANDed; the cheap equality checks run before the
//! substring search.

use crate::criteria::FilterCriteria;
use agromarket_model::ProductRecord;

/// Returns the records matching every criterion, in input order.
pub fn filter<'a, I>(records: I, criteria: &FilterCriteria) -> Vec<&'a ProductRecord>
where
    I: IntoIterator<Item = &'a ProductRecord>,
{
    let term = criteria.search_term();
    records
        .into_iter()
        .filter(|record| matches_with_term(record, criteria, term.as_deref()))
        .collect()
}

/// Whether a single record satisfies the criteria.
#[must_use]
pub fn matches(record: &ProductRecord, criteria: &FilterCriteria) -> bool {
    let term = criteria.search_term();
    matches_with_term(record, criteria, term.as_deref())
}

fn matches_with_term(record: &ProductRecord, criteria: &FilterCriteria, term: Option<&str>) -> bool {
    criteria.status.allows(|status| status.matches(record.is_active()))
        && criteria.category.allows(|category| *category == record.category())
        && criteria.priority.allows(|priority| *priority == record.priority())
        && term.is_none_or(|term| text_contains(record, term))
}

/// `term` must already be lower-cased.
fn text_contains(record: &ProductRecord, term: &str) -> bool {
    record.name().to_lowercase().contains(term) || record.description().to_lowercase().contains(term)
}
