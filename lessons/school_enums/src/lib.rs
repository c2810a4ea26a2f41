//! School Enums - the enumeration lesson.
//!
//! - [`RawEnum`]: cases with fixed raw strings, some derived from the case
//!   name, one assigned explicitly.
//! - [`AssociatedEnum`]: a case that carries a payload, with a message
//!   computed by matching on it.
//!
//! Both are value types: a binding holds exactly one case at a time.

mod associated;
mod raw;

pub use associated::AssociatedEnum;
pub use raw::{RawEnum, RawEnumIter};

use school_core::{Categorized, PrintHandlerImpl, ValueCategory};

impl Categorized for RawEnum {
    const CATEGORY: ValueCategory = ValueCategory::Value;
    const TYPE_NAME: &'static str = "RawEnum";
}

impl Categorized for AssociatedEnum {
    const CATEGORY: ValueCategory = ValueCategory::Value;
    const TYPE_NAME: &'static str = "AssociatedEnum";
}

/// Run the enumeration demonstration, writing each observed line to `out`.
#[tracing::instrument(level = "debug", skip_all)]
pub fn demonstrate(out: &PrintHandlerImpl) {
    out.println(&RawEnum::describe_category());

    for case in RawEnum::ALL {
        out.println(&format!("RawEnum::{case:?} = {}", case.raw_representation()));
    }

    let mut current = RawEnum::One;
    out.println(&format!("current = {current}"));
    current = RawEnum::Two;
    out.println(&format!("current = {current}"));
    current = RawEnum::Three;
    out.println(&format!("current = {current}"));

    let greeting = AssociatedEnum::greeting("student");
    tracing::trace!(payload = greeting.payload(), "built greeting");
    out.println(&greeting.message());
}
