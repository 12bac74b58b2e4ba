// Application-tracking dashboard: status grouping, drag-and-drop state and the
// controller that loads, mutates and reloads the column view.

pub mod controller;
pub mod drag;
pub mod grouping;
pub mod handlers;
