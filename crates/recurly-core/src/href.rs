//! Resource links.

/// Extract the resource code from an href of the form
/// `.../{collection}/{code}`.
///
/// Query strings and fragments are ignored. Returns `None` when the path
/// does not end in a member of `collection`.
#[must_use]
pub fn resource_code<'a>(href: &'a str, collection: &str) -> Option<&'a str> {
    let path = href.split(['?', '#']).next().unwrap_or(href);
    let path = path.trim_end_matches('/');
    let (parent, code) = path.rsplit_once('/')?;
    let parent_name = parent.rsplit('/').next()?;
    (parent_name == collection && !code.is_empty()).then_some(code)
}
