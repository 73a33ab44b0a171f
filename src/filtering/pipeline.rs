use super::fields::resolve_field;
use super::pagination::Page;
use super::predicates::{
    activity_matches, numeric_range, quantity_matches, reversibility_matches, search_matches,
};
use super::query::{CompoundQuery, NumericRange};
use crate::record::{Fields, Record};

pub const MOL_WEIGHT_FIELD: &str = "totalmolweight";
pub const IC50_FIELD: &str = "ic50";

/// Whether `record` passes every predicate of `query`.
///
/// Predicates run in a fixed order and the first failure short-circuits; none
/// of them has side effects, so the order only affects cost.
#[must_use]
pub fn matches(record: &Record, query: &CompoundQuery) -> bool {
    let fields = &record.fields;

    within(fields, MOL_WEIGHT_FIELD, query.mol_weight)
        && within(fields, IC50_FIELD, query.ic50)
        && activity_matches(fields, query.activity.as_deref())
        && reversibility_matches(fields, query.reversibility.as_deref())
        && quantity_matches(fields, query.quantity_mode, query.quantity)
        && search_matches(fields, &query.search_text, &query.search_fields)
}

/// Range test on a flexibly resolved field. Resolution is skipped when the
/// range has no bounds.
fn within(fields: &Fields, name: &str, range: NumericRange) -> bool {
    range.is_unbounded() || numeric_range(resolve_field(fields, name), range)
}

/// Stable filter: retained records keep their original relative order.
#[must_use]
pub fn filter_records<'a>(records: &'a [Record], query: &CompoundQuery) -> Vec<&'a Record> {
    records.iter().filter(|record| matches(record, query)).collect()
}

/// Filter, then cut out the requested page.
#[must_use]
pub fn apply<'a>(records: &'a [Record], query: &CompoundQuery) -> Page<&'a Record> {
    Page::from_matches(filter_records(records, query), query.page)
}
