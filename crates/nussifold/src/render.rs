//! Drawing folded structures.
//!
//! Renderers only consume the sequence and its pair list. `CirclePlot`
//! draws natively into an SVG file, `ExternalRenderer` hands the data to
//! another program.

use std::fmt;
use std::error::Error;
use std::f64::consts::PI;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::process::ExitStatus;
use std::process::Stdio;

use log::{debug, info};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use ff_folding::Base;
use ff_folding::NucleotideVec;
use ff_structure::PairList;

#[derive(Debug)]
pub enum RenderError {
    Io(std::io::Error),
    Plot(String),
    ExitStatus { program: String, status: ExitStatus },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {}", e),
            Self::Plot(e) => write!(f, "Plotting error: {}", e),
            Self::ExitStatus { program, status } =>
                write!(f, "Renderer '{program}' failed: {status}"),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RenderError {
    fn from(e: std::io::Error) -> Self { Self::Io(e) }
}

pub trait StructureRenderer {
    fn render(&self, name: &str, sequence: &NucleotideVec, pairs: &PairList) -> Result<(), RenderError>;
}

/// Runs `program [args...] SEQUENCE INDEX_CSV` and waits for it to exit.
/// The program's stdout is captured and logged, never mixed into ours.
#[derive(Debug, Clone)]
pub struct ExternalRenderer {
    program: PathBuf,
    args: Vec<String>,
}

impl ExternalRenderer {
    pub fn new<P: AsRef<Path>>(program: P, args: Vec<String>) -> Self {
        Self { program: program.as_ref().to_path_buf(), args }
    }

    pub fn command_line(&self, sequence: &str, index_csv: &str) -> Vec<String> {
        let mut line = vec![self.program.display().to_string()];
        line.extend(self.args.iter().cloned());
        line.push(sequence.to_string());
        line.push(index_csv.to_string());
        line
    }

    /// Runs the program to completion and returns what it printed on stdout.
    pub fn run(&self, sequence: &str, index_csv: &str) -> Result<String, RenderError> {
        debug!("Running {:?}", self.command_line(sequence, index_csv));
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(sequence)
            .arg(index_csv)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()?;
        if !output.status.success() {
            return Err(RenderError::ExitStatus {
                program: self.program.display().to_string(),
                status: output.status,
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl StructureRenderer for ExternalRenderer {
    fn render(&self, name: &str, sequence: &NucleotideVec, pairs: &PairList) -> Result<(), RenderError> {
        let stdout = self.run(&sequence.to_string(), &pairs.index_csv())?;
        for line in stdout.lines() {
            info!("{name}: {line}");
        }
        Ok(())
    }
}

/// Nucleotides on a circle, backbone in black, base pairs as red chords.
#[derive(Debug, Clone)]
pub struct CirclePlot {
    prefix: String,
    size: (u32, u32),
    labels: bool,
}

fn base_color(base: Base) -> RGBColor {
    match base {
        Base::A => RGBColor(173, 216, 230),
        Base::U => RGBColor(255, 0, 0),
        Base::G => RGBColor(144, 238, 144),
        Base::C => RGBColor(255, 255, 0),
        Base::N => RGBColor(190, 190, 190),
    }
}

impl CirclePlot {
    pub fn new(prefix: &str) -> Self {
        Self { prefix: prefix.to_string(), size: (800, 800), labels: true }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    pub fn with_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        PathBuf::from(format!("{}{}.svg", self.prefix, name))
    }

    /// Pixel position of every nucleotide, clockwise from the top.
    fn layout(&self, n: usize) -> Vec<(i32, i32)> {
        let (w, h) = self.size;
        let (cx, cy) = (w as f64 / 2.0, h as f64 / 2.0);
        let radius = (w.min(h) as f64 / 2.0 - 40.0).max(10.0);
        (0..n).map(|i| {
            let phi = 2.0 * PI * i as f64 / n as f64 - PI / 2.0;
            ((cx + radius * phi.cos()) as i32, (cy + radius * phi.sin()) as i32)
        }).collect()
    }
}

fn plot_err<E: fmt::Display>(e: E) -> RenderError {
    RenderError::Plot(e.to_string())
}

impl StructureRenderer for CirclePlot {
    fn render(&self, name: &str, sequence: &NucleotideVec, pairs: &PairList) -> Result<(), RenderError> {
        let path = self.path_for(name);
        let root = SVGBackend::new(&path, self.size).into_drawing_area();
        root.fill(&WHITE).map_err(plot_err)?;

        let points = self.layout(sequence.len());
        for w in points.windows(2) {
            root.draw(&PathElement::new(vec![w[0], w[1]], BLACK.stroke_width(1)))
                .map_err(plot_err)?;
        }
        for &(i, j) in pairs.iter() {
            root.draw(&PathElement::new(vec![points[i], points[j]], RED.stroke_width(2)))
                .map_err(plot_err)?;
        }

        let node_size = if sequence.len() > 60 { 5 } else { 10 };
        let label_style = TextStyle::from(("sans-serif", 10).into_font())
            .pos(Pos::new(HPos::Center, VPos::Center));
        for (i, (&base, &p)) in sequence.iter().zip(&points).enumerate() {
            root.draw(&Circle::new(p, node_size, base_color(base).filled()))
                .map_err(plot_err)?;
            if self.labels {
                root.draw(&Text::new(format!("{}{}", base, i), p, label_style.clone()))
                    .map_err(plot_err)?;
            }
        }

        root.present().map_err(plot_err)?;
        info!("Wrote circle plot: {}", path.display());
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn hairpin() -> (NucleotideVec, PairList) {
        let seq = NucleotideVec::try_from("GGAAAACC").unwrap();
        let mut pairs = PairList::new(seq.len());
        pairs.push(0, 7);
        pairs.push(1, 6);
        (seq, pairs)
    }

    #[test]
    fn test_layout_on_circle() {
        let plot = CirclePlot::new("x").with_size(200, 200);
        let points = plot.layout(4);
        assert_eq!(points.len(), 4);
        assert_eq!(points[0], (100, 40));
        assert!(plot.layout(0).is_empty());
    }

    #[test]
    fn test_plot_file_name() {
        let plot = CirclePlot::new("out/nf_");
        assert_eq!(plot.path_for("hairpin"), PathBuf::from("out/nf_hairpin.svg"));
    }

    #[test]
    fn test_circle_plot_writes_svg() {
        let (seq, pairs) = hairpin();
        let prefix = std::env::temp_dir()
            .join(format!("nussifold_test_{}_", std::process::id()));
        let plot = CirclePlot::new(&prefix.display().to_string())
            .with_size(300, 300)
            .with_labels(false);
        plot.render("hairpin", &seq, &pairs).unwrap();
        let path = plot.path_for("hairpin");
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_command_line() {
        let (seq, pairs) = hairpin();
        let ext = ExternalRenderer::new("plot", vec![]);
        assert_eq!(
            ext.command_line(&seq.to_string(), &pairs.index_csv()),
            ["plot", "GGAAAACC", "0,7,1,6"]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_external_renderer_exit_status() {
        let (seq, pairs) = hairpin();
        assert!(ExternalRenderer::new("true", vec![]).render("ok", &seq, &pairs).is_ok());
        let err = ExternalRenderer::new("false", vec![]).render("fail", &seq, &pairs).unwrap_err();
        assert!(matches!(err, RenderError::ExitStatus { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_external_renderer_captures_stdout() {
        let (seq, pairs) = hairpin();
        let ext = ExternalRenderer::new("echo", vec!["drawn".into()]);
        let out = ext.run(&seq.to_string(), &pairs.index_csv()).unwrap();
        assert_eq!(out, "drawn GGAAAACC 0,7,1,6\n");
    }

    #[test]
    fn test_external_renderer_missing_program() {
        let (seq, pairs) = hairpin();
        let err = ExternalRenderer::new("/nonexistent/nussifold-renderer", vec![])
            .render("missing", &seq, &pairs)
            .unwrap_err();
        assert!(matches!(err, RenderError::Io(_)));
    }
}
