pub mod anomaly_alert;
pub mod budget_panel;
pub mod chart_canvas;
pub mod expense_form;
pub mod expense_list;
pub mod export_panel;
pub mod insight_card;
pub mod month_picker;
pub mod reports_table;
pub mod spending_profile_card;
pub mod stats_grid;
pub mod wrapped;

pub use anomaly_alert::AnomalyAlert;
pub use budget_panel::BudgetPanel;
pub use chart_canvas::{ChartCanvas, ChartKind};
pub use expense_form::ExpenseForm;
pub use expense_list::ExpenseList;
pub use export_panel::ExportPanel;
pub use insight_card::InsightCard;
pub use month_picker::MonthPicker;
pub use reports_table::ReportsTable;
pub use spending_profile_card::SpendingProfileCard;
pub use stats_grid::StatsGrid;
pub use wrapped::WrappedContainer;
