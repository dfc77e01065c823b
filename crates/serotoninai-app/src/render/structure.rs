use std::path::{Path, PathBuf};

use anyhow::Context;
use console::style;
use serotoninai_molecules::structure::StructureSketch;

pub fn render_structure(compound_name: &str, sketch: &StructureSketch) -> String {
    if !sketch.valid {
        return format!(
            "{} {}\n    {}\n",
            style("Chemical Structure").bold(),
            style("[Error]").red(),
            style("Invalid SMILES: cannot render structure").red()
        );
    }
    format!(
        "{} {}\n{}\n    Complexity: {} characters | Rings: {} | Branches: {}\n",
        style("Chemical Structure").bold(),
        style("[Rendered]").green(),
        style(format!("2D molecular structure visualization for {compound_name}")).dim(),
        sketch.complexity,
        sketch.rings,
        sketch.branches
    )
}

/// File-system friendly name: alphanumerics kept, everything else `_`.
pub fn svg_file_name(compound_name: &str) -> String {
    let stem: String = compound_name
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    let stem = if stem.is_empty() { "structure".to_string() } else { stem };
    format!("{stem}.svg")
}

pub fn write_svg(dir: &Path, compound_name: &str, sketch: &StructureSketch) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    let path = dir.join(svg_file_name(compound_name));
    std::fs::write(&path, sketch.to_svg()).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Wrote structure sketch to {}", path.display());
    Ok(path)
}
