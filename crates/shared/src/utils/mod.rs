mod csv;
mod gracefullshutdown;
mod logs;
mod metrics;
mod otel;
mod template;

pub use self::csv::{csv_escape, csv_row};
pub use self::gracefullshutdown::shutdown_signal;
pub use self::logs::init_logger;
pub use self::metrics::{
    Labels, Method, Metrics, Status, SystemMetrics, run_metrics_collector,
};
pub use self::otel::{Telemetry, TelemetryProviders};
pub use self::template::{
    CartRow, CartTemplate, LowStockEmailTemplate, format_money, render_cart,
    render_low_stock_email,
};
