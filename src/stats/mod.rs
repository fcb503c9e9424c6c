pub mod distribution;
pub mod output;

pub use distribution::{
    CategoryReport, ItemFrequency, StatsReport, acceptance_rate, measure_category, measure_tables,
};
pub use output::{print_report, write_csv};
