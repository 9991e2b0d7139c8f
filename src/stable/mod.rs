// Bubble sort, swaps adjacent elements only when strictly out of order.
pub mod rust_bubble;
