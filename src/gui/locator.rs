// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Element lookup in parsed GUI pages

use scraper::{ElementRef, Html};

/// Marker that identifies the controller's inventory script
pub const INVENTORY_MARKER: &str = "var apListData=[";

/// Depth-first, pre-order search for the first element matching `predicate`
///
/// The element itself is checked before its children, and children are
/// visited in document order. Stops at the first match.
pub fn find_first<'a, P>(element: ElementRef<'a>, predicate: &P) -> Option<ElementRef<'a>>
where
    P: Fn(&ElementRef<'a>) -> bool,
{
    if predicate(&element) {
        return Some(element);
    }

    element
        .children()
        .filter_map(ElementRef::wrap)
        .find_map(|child| find_first(child, predicate))
}

/// Searches a whole document starting at its root element
pub fn find_in_document<'a, P>(document: &'a Html, predicate: &P) -> Option<ElementRef<'a>>
where
    P: Fn(&ElementRef<'a>) -> bool,
{
    find_first(document.root_element(), predicate)
}

/// Concatenated text of all descendant text nodes
pub fn text_content(element: &ElementRef<'_>) -> String {
    element.text().collect()
}

/// `<script>` element whose body contains the inventory array
pub fn is_inventory_script(element: &ElementRef<'_>) -> bool {
    element.value().name() == "script" && text_content(element).contains(INVENTORY_MARKER)
}

/// Predicate matching an element whose `id` attribute equals `id`
pub fn has_id<'i>(id: &'i str) -> impl Fn(&ElementRef<'_>) -> bool + 'i {
    move |element| element.value().attr("id") == Some(id)
}
