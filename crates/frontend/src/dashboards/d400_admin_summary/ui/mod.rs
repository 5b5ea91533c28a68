mod dashboard;

pub use dashboard::AdminSummaryDashboard;
