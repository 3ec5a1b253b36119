pub mod synthetic_chart;
