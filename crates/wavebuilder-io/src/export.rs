//! Text exports: Rust source and CSV.

use wavebuilder_core::WaveTable;

/// Samples per line in generated source.
const VALUES_PER_LINE: usize = 12;

/// Render a table as a `pub static` array.
///
/// `name` becomes an upper snake case identifier: ASCII letters and digits
/// are kept, everything else turns into `_`, and a leading digit gets a `_`
/// prefix.
///
/// ```rust
/// use wavebuilder_core::{BuilderConfig, Oscillator, WaveBuilder, WaveShape};
/// use wavebuilder_io::render_rust_source;
///
/// let config = BuilderConfig::new(vec![Oscillator::new(WaveShape::Square, 1.0, 0.5)], 8)
///     .with_loop_smoothing(false);
/// let builder = WaveBuilder::new(config).unwrap();
/// let source = render_rust_source("soft square", builder.wave_table());
/// assert!(source.contains("pub static SOFT_SQUARE: [i16; 8] = ["));
/// ```
pub fn render_rust_source(name: &str, table: &WaveTable) -> String {
    let ident = static_ident(name);
    let mut out = format!(
        "/// Single-cycle wave table, {} samples, summed amplitude {:.3}, loop distortion {:.3}%.\n",
        table.len(),
        table.summed_amplitude(),
        table.loop_distortion()
    );
    out.push_str(&format!("pub static {ident}: [i16; {}] = [\n", table.len()));
    for line in table.as_slice().chunks(VALUES_PER_LINE) {
        let values: Vec<String> = line.iter().map(ToString::to_string).collect();
        out.push_str(&format!("    {},\n", values.join(", ")));
    }
    out.push_str("];\n");
    out
}

/// Render a table as `index,sample` CSV with a header row.
pub fn render_csv(table: &WaveTable) -> String {
    let rows = table
        .as_slice()
        .iter()
        .enumerate()
        .map(|(index, sample)| format!("{index},{sample}\n"));
    std::iter::once("index,sample\n".to_string()).chain(rows).collect()
}

fn static_ident(name: &str) -> String {
    let mut ident: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();

    if ident.is_empty() {
        ident.push_str("WAVE_TABLE");
    } else if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}
