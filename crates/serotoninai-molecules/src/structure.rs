//! Placeholder 2D structure sketch.
//!
//! This is not a depiction of the molecule. It counts a few characters in the
//! SMILES string and draws a fixed glyph that grows with them.

use std::fmt::Write as _;

use serde::Serialize;

const PRIMARY: &str = "#8b5cf6";
const SECONDARY: &str = "#06b6d4";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StructureSketch {
    /// SMILES length in characters
    pub complexity: usize,
    /// Count of `[` and `]`
    pub rings: usize,
    /// Count of `(` and `)`
    pub branches: usize,
    pub valid: bool,
}

impl StructureSketch {
    pub fn from_smiles(smiles: &str) -> Self {
        let smiles = smiles.trim();
        Self {
            complexity: smiles.chars().count(),
            rings: smiles.chars().filter(|c| matches!(c, '[' | ']')).count(),
            branches: smiles.chars().filter(|c| matches!(c, '(' | ')')).count(),
            valid: !smiles.is_empty(),
        }
    }

    /// Render the sketch as a standalone SVG document (200×200 viewBox).
    pub fn to_svg(&self) -> String {
        let mut svg = String::from(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 200 200" width="200" height="200">"#);
        svg.push('\n');

        if !self.valid {
            svg.push_str(r##"  <rect x="0" y="0" width="200" height="200" fill="#fee2e2"/>"##);
            svg.push('\n');
            svg.push_str(r##"  <text x="100" y="105" text-anchor="middle" fill="#b91c1c" font-size="16">Invalid SMILES</text>"##);
            svg.push_str("\n</svg>\n");
            return svg;
        }

        circle(&mut svg, 100, 100, 8, PRIMARY);
        if self.complexity > 20 {
            bond(&mut svg, (100, 100), (150, 80));
            circle(&mut svg, 150, 80, 6, SECONDARY);
        }
        if self.complexity > 30 {
            bond(&mut svg, (100, 100), (50, 120));
            circle(&mut svg, 50, 120, 6, SECONDARY);
        }
        if self.rings > 0 {
            bond(&mut svg, (100, 100), (120, 150));
            circle(&mut svg, 120, 150, 6, SECONDARY);
            bond(&mut svg, (120, 150), (80, 150));
            circle(&mut svg, 80, 150, 6, SECONDARY);
            bond(&mut svg, (80, 150), (100, 100));
        }
        if self.branches > 0 {
            bond(&mut svg, (100, 100), (100, 50));
            circle(&mut svg, 100, 50, 6, SECONDARY);
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Number of atoms drawn besides the central one.
    pub fn satellite_atoms(&self) -> usize {
        if !self.valid {
            return 0;
        }
        usize::from(self.complexity > 20)
            + usize::from(self.complexity > 30)
            + 2 * usize::from(self.rings > 0)
            + usize::from(self.branches > 0)
    }
}

fn circle(svg: &mut String, cx: u32, cy: u32, r: u32, fill: &str) {
    let _ = writeln!(svg, r#"  <circle cx="{cx}" cy="{cy}" r="{r}" fill="{fill}"/>"#);
}

fn bond(svg: &mut String, from: (u32, u32), to: (u32, u32)) {
    let _ = writeln!(
        svg,
        r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="2"/>"#,
        from.0, from.1, to.0, to.1, PRIMARY
    );
}
