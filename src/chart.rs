use anyhow::Result;
use plotters::prelude::*;
use std::path::Path;

const CHART_SIZE: (u32, u32) = (1280, 720);
const BAR_COLOR: RGBColor = RGBColor(70, 130, 180);

/// Horizontal bar chart with one bar per row, largest at the top, and the
/// formatted value printed at the end of each bar. Rows are expected to be
/// sorted the way they should read, top to bottom.
pub fn horizontal_bars(
    path: &Path,
    caption: &str,
    x_desc: &str,
    rows: &[(String, f64)],
    fmt: fn(f64) -> String,
) -> Result<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let n = rows.len() as i32;
    let x_max = axis_max(rows.iter().map(|r| r.1));
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(220)
        .build_cartesian_2d(0f64..x_max, 0..n)?;
    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_desc(x_desc)
        .y_labels(rows.len())
        .y_label_formatter(&|slot| {
            let i = n - 1 - *slot;
            rows.get(i as usize).map(|r| r.0.clone()).unwrap_or_default()
        })
        .draw()?;

    // slot 0 is the bottom of the chart, so the first row goes to slot n-1
    for (i, (_, value)) in rows.iter().enumerate() {
        let slot = n - 1 - i as i32;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(0.0, slot), (*value, slot + 1)],
            BAR_COLOR.mix(0.8).filled(),
        )))?;
        chart.draw_series(std::iter::once(Text::new(
            fmt(*value),
            (*value, slot),
            ("sans-serif", 16),
        )))?;
    }

    root.present()?;
    Ok(())
}

/// Vertical bar chart, one labeled bar per row in the given order.
pub fn vertical_bars(
    path: &Path,
    caption: &str,
    x_desc: &str,
    y_desc: &str,
    rows: &[(String, f64)],
    fmt: fn(f64) -> String,
) -> Result<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let n = rows.len() as i32;
    let y_max = axis_max(rows.iter().map(|r| r.1));
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0..n, 0f64..y_max)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .x_labels(rows.len())
        .x_label_formatter(&|i| {
            rows.get(*i as usize).map(|r| r.0.clone()).unwrap_or_default()
        })
        .draw()?;

    for (i, (_, value)) in rows.iter().enumerate() {
        let i = i as i32;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(i, 0.0), (i + 1, *value)],
            BAR_COLOR.mix(0.8).filled(),
        )))?;
        chart.draw_series(std::iter::once(Text::new(
            fmt(*value),
            (i, *value),
            ("sans-serif", 16),
        )))?;
    }

    root.present()?;
    Ok(())
}

// 15% headroom so value labels stay inside the plot area.
fn axis_max(values: impl Iterator<Item = f64>) -> f64 {
    let max = values.fold(0.0f64, f64::max) * 1.15;
    if max > 0.0 { max } else { 1.0 }
}

#[cfg(test)]
mod test_chart {
    use super::*;

    #[test]
    fn writes_horizontal_bar_png() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("bars.png");
        let rows = vec![("Action".to_string(), 3.0), ("Drama".to_string(), 1.0)];
        horizontal_bars(&path, "test", "Count", &rows, |v| format!("{v:.0}"))?;
        assert!(path.metadata()?.len() > 0);
        Ok(())
    }

    #[test]
    fn writes_vertical_bar_png() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("bars.png");
        let rows = vec![("Popular".to_string(), 2.0), ("Average".to_string(), 1.0)];
        vertical_bars(&path, "test", "Label", "Count", &rows, |v| format!("{v:.0}"))?;
        assert!(path.metadata()?.len() > 0);
        Ok(())
    }

    #[test]
    fn unwritable_path_is_fatal() {
        let rows = vec![("Action".to_string(), 1.0)];
        let res = horizontal_bars(
            Path::new("/no/such/dir/bars.png"),
            "test",
            "Count",
            &rows,
            |v| format!("{v:.0}"),
        );
        assert!(res.is_err());
    }
}
