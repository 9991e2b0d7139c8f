// Selection sort, long-distance swaps may reorder equal elements.
pub mod rust_selection;
