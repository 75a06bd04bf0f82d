// File: crates/profile-analysis/src/plots.rs
// Summary: Chart builders for the page-fault time series and the utilization/finish-time dual-axis view.

use chart_core::theme::{TAB_BLUE, TAB_RED};
use chart_core::{Axis, AxisSide, Chart, LegendPosition, Marker, Series};

use crate::samples::SampleSeries;
use crate::utilization::UtilizationSeries;

/// Fraction of each data span added on both sides of an autoscaled axis.
pub const AXIS_MARGIN: f64 = 0.05;

pub const PAGE_FAULT_TITLE: &str = "Accumulated Page Fault Count vs Time";
pub const MINOR_FAULTS_LABEL: &str = "Minor Page Faults";
pub const MAJOR_FAULTS_LABEL: &str = "Major Page Faults";

pub const UTILIZATION_TITLE: &str = "CPU Utilization and Finish Time vs Degree of Multiprogramming";
pub const UTILIZATION_LABEL: &str = "CPU Utilization";
pub const FINISH_TIME_LABEL: &str = "Finish Time (s)";

/// Minor and major fault counts against jiffies, sharing one y axis.
pub fn page_fault_chart(samples: &SampleSeries) -> Chart {
    let column = |ys: &[u64]| -> Vec<(f64, f64)> {
        samples.jiffies.iter().zip(ys).map(|(&x, &y)| (x as f64, y as f64)).collect()
    };

    let mut chart = Chart::new().with_title(PAGE_FAULT_TITLE);
    chart.x_axis = Axis::new("Jiffies", 0.0, 1.0);
    chart.y_axis = Axis::new("Accumulated Page Fault Count", 0.0, 1.0);
    chart.grid = Some(AxisSide::Left);
    chart.legend = Some(LegendPosition::UpperLeft);
    chart.add_series(Series::with_data(MINOR_FAULTS_LABEL, column(&samples.minor_faults)));
    chart.add_series(Series::with_data(MAJOR_FAULTS_LABEL, column(&samples.major_faults)));
    chart.autoscale_axes(AXIS_MARGIN);
    chart
}

/// Utilization (left, red circles) and finish time (right, blue crosses) against N.
/// Each axis is labelled in its series colour.
pub fn utilization_chart(report: &UtilizationSeries) -> Chart {
    let column = |ys: &[f64]| -> Vec<(f64, f64)> {
        report.n.iter().zip(ys).map(|(&n, &y)| (f64::from(n), y)).collect()
    };

    let mut chart = Chart::new().with_title(UTILIZATION_TITLE);
    chart.x_axis = Axis::new("Number of Instances (N)", 0.0, 1.0);
    chart.y_axis = Axis::new(UTILIZATION_LABEL, 0.0, 1.0).with_color(TAB_RED);
    chart.y2_axis = Some(Axis::new(FINISH_TIME_LABEL, 0.0, 1.0).with_color(TAB_BLUE));
    // the grid follows the secondary axis, which is the one created last
    chart.grid = Some(AxisSide::Right);
    chart.add_series(
        Series::with_data(UTILIZATION_LABEL, column(&report.cpu_utilization))
            .with_color(TAB_RED)
            .with_marker(Marker::Circle),
    );
    chart.add_series(
        Series::with_data(FINISH_TIME_LABEL, column(&report.finish_time_s))
            .with_color(TAB_BLUE)
            .with_marker(Marker::Cross)
            .on_axis(AxisSide::Right),
    );
    chart.autoscale_axes(AXIS_MARGIN);
    chart
}
