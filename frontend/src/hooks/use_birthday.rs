use std::rc::Rc;

use shared::ResolvedBirthday;
use yew::prelude::*;

use crate::services::logging::Logger;
use crate::services::navigation::PageLocation;

/// Resolve the birthday carried in the page's query string.
///
/// Recomputed only when the query string changes. Malformed values resolve
/// to the placeholder display rather than an error.
#[hook]
pub fn use_birthday(location: &PageLocation) -> Rc<ResolvedBirthday> {
    use_memo(location.clone(), |location| {
        let query = location.birthday_query();
        let resolved = query.resolve();
        if resolved.date.is_none() {
            Logger::debug_with_component(
                "use-birthday",
                &format!("No usable birthday in {:?}, showing placeholders", query.raw()),
            );
        }
        resolved
    })
}
