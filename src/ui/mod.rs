/// Rendering: toolbar and KPI cards, charts, raw table.
pub mod panels;
pub mod plot;
pub mod table;
