//! CSV query files (polars).
//!
//! Columns: `x0,y0,x1,y1` (segment) and `rx,ry,rw,rh` (rectangle). Batch
//! output repeats them and appends `t_entry,t_exit,hit`; misses are written
//! as `inf` fractions with `hit = false`.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use rectcast::api::{raycast_seg_rect, Query, Rect2, RectHit, Seg2};
use rectcast::Vec2;
use std::fs::File;
use std::path::Path;

pub const COLUMNS: [&str; 8] = ["x0", "y0", "x1", "y1", "rx", "ry", "rw", "rh"];

fn column_f64(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let series = df
        .column(name)
        .with_context(|| format!("missing column {name}"))?
        .cast(&DataType::Float64)?;
    let values = series.f64()?;
    Ok(values.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
}

/// Read `(rect, seg)` rows; rows with a non-finite or negative rectangle are rejected.
pub fn read_queries(path: &str) -> Result<Vec<(Rect2, Seg2)>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {path}"))?
        .collect()?;
    let cols = COLUMNS
        .iter()
        .map(|name| column_f64(&df, name))
        .collect::<Result<Vec<_>>>()?;
    let mut out = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let v = |c: usize| cols[c][row];
        let Some(rect) = Rect2::try_new(v(4), v(5), v(6), v(7)) else {
            bail!("row {row}: invalid rectangle ({}, {}, {}, {})", v(4), v(5), v(6), v(7));
        };
        let seg = Seg2::new(Vec2::new(v(0), v(1)), Vec2::new(v(2), v(3)));
        out.push((rect, seg));
    }
    Ok(out)
}

fn write_frame(mut df: DataFrame, out: &str) -> Result<()> {
    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut file = File::create(out_path).with_context(|| format!("creating {out}"))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {out}"))?;
    Ok(())
}

struct QueryColumns {
    x0: Vec<f64>,
    y0: Vec<f64>,
    x1: Vec<f64>,
    y1: Vec<f64>,
    rx: Vec<f64>,
    ry: Vec<f64>,
    rw: Vec<f64>,
    rh: Vec<f64>,
}

impl QueryColumns {
    fn from_rows<'a>(rows: impl Iterator<Item = (&'a Rect2, &'a Seg2)>) -> Self {
        let mut c = QueryColumns {
            x0: Vec::new(),
            y0: Vec::new(),
            x1: Vec::new(),
            y1: Vec::new(),
            rx: Vec::new(),
            ry: Vec::new(),
            rw: Vec::new(),
            rh: Vec::new(),
        };
        for (rect, seg) in rows {
            c.x0.push(seg.begin.x);
            c.y0.push(seg.begin.y);
            c.x1.push(seg.end.x);
            c.y1.push(seg.end.y);
            c.rx.push(rect.x_min);
            c.ry.push(rect.y_min);
            c.rw.push(rect.width);
            c.rh.push(rect.height);
        }
        c
    }
}

/// Write sampled queries in the input format of `batch`.
pub fn write_queries(queries: &[Query], out: &str) -> Result<()> {
    let c = QueryColumns::from_rows(queries.iter().map(|q| (&q.rect, &q.seg)));
    let df = df!(
        "x0" => c.x0, "y0" => c.y0, "x1" => c.x1, "y1" => c.y1,
        "rx" => c.rx, "ry" => c.ry, "rw" => c.rw, "rh" => c.rh
    )?;
    write_frame(df, out)
}

/// Raycast every row and write inputs plus results.
pub fn run_batch(rows: &[(Rect2, Seg2)], out: &str) -> Result<Vec<RectHit>> {
    let hits: Vec<RectHit> = rows
        .iter()
        .map(|(rect, seg)| raycast_seg_rect(seg, rect))
        .collect();
    let c = QueryColumns::from_rows(rows.iter().map(|(r, s)| (r, s)));
    let t_entry: Vec<f64> = hits.iter().map(|h| h.t_entry).collect();
    let t_exit: Vec<f64> = hits.iter().map(|h| h.t_exit).collect();
    let hit: Vec<bool> = hits.iter().map(|h| h.has_hit()).collect();
    let df = df!(
        "x0" => c.x0, "y0" => c.y0, "x1" => c.x1, "y1" => c.y1,
        "rx" => c.rx, "ry" => c.ry, "rw" => c.rw, "rh" => c.rh,
        "t_entry" => t_entry, "t_exit" => t_exit, "hit" => hit
    )?;
    write_frame(df, out)?;
    Ok(hits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rectcast::api::{draw_queries, SampleCfg};
    use tempfile::tempdir;

    #[test]
    fn sample_then_batch_roundtrip() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("q.csv");
        let output = dir.path().join("out/hits.csv");
        let queries = draw_queries(SampleCfg::default(), 1, 16).unwrap();
        write_queries(&queries, input.to_str().unwrap()).unwrap();

        let rows = read_queries(input.to_str().unwrap()).unwrap();
        assert_eq!(rows.len(), 16);
        assert!((rows[0].0.x_min - queries[0].rect.x_min).abs() < 1e-12);
        assert!((rows[0].1.end.y - queries[0].seg.end.y).abs() < 1e-12);

        let hits = run_batch(&rows, output.to_str().unwrap()).unwrap();
        assert_eq!(hits.len(), 16);
        let text = std::fs::read_to_string(&output).unwrap();
        let header = text.lines().next().unwrap();
        assert_eq!(header, "x0,y0,x1,y1,rx,ry,rw,rh,t_entry,t_exit,hit");
        assert_eq!(text.lines().count(), 17);
    }

    #[test]
    fn invalid_rectangle_row_is_an_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("bad.csv");
        std::fs::write(&input, "x0,y0,x1,y1,rx,ry,rw,rh\n0,0,1,1,0,0,-2,1\n").unwrap();
        let err = read_queries(input.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("row 0"));
    }

    #[test]
    fn missing_column_is_an_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("short.csv");
        std::fs::write(&input, "x0,y0\n0,0\n").unwrap();
        assert!(read_queries(input.to_str().unwrap()).is_err());
    }
}
