//! School Structs - the value-type lesson.
//!
//! `ValueRecord` is `Copy`: `let r2 = r1;` produces an independent record, so
//! a write to one binding never shows up in the other. Contrast with
//! `school_classes::Shared`, where assignment aliases.

use school_core::{Categorized, PrintHandlerImpl, ValueCategory};

/// A mutable record with value semantics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ValueRecord {
    pub value: i64,
}

impl ValueRecord {
    #[inline]
    pub const fn new(value: i64) -> Self {
        ValueRecord { value }
    }
}

impl Categorized for ValueRecord {
    const CATEGORY: ValueCategory = ValueCategory::Value;
    const TYPE_NAME: &'static str = "ValueRecord";
}

/// Run the value-type demonstration, writing each observed line to `out`.
#[tracing::instrument(level = "debug", skip_all)]
pub fn demonstrate(out: &PrintHandlerImpl) {
    out.println(&ValueRecord::describe_category());

    let mut record = ValueRecord::new(0);
    record.value = 10;

    let mut copy = record;
    copy.value = 11;
    tracing::debug!(?record, ?copy, "mutated copy");

    out.println(&format!("record.value = {}", record.value));
    out.println(&format!("copy.value = {}", copy.value));
}
