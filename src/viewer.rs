//! 3Dmol.js viewer page templating.
//!
//! The 3D renderer is an opaque collaborator: it accepts a structure
//! payload, one style directive, and a list of per-residue
//! `(position, color, label)` annotations with 1-indexed residue numbers.
//! This module assembles the self-contained HTML page that drives it.

use serde::{Deserialize, Serialize};

use crate::mutations::Mutation;
use crate::risk::RiskLevel;

/// Pinned 3Dmol.js release loaded by the generated page.
const MOL_JS_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/3Dmol/2.0.4/3Dmol-min.js";

/// Visualization style for the whole structure.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ViewStyle {
    /// Ribbon cartoon (default).
    #[default]
    Cartoon,
    /// Stick bonds.
    Stick,
    /// Space-filling spheres.
    Sphere,
    /// Translucent molecular surface.
    Surface,
}

impl ViewStyle {
    /// 3Dmol.js style-object fragment for this style.
    #[must_use]
    pub fn directive(&self, color_scheme: ColorScheme) -> String {
        let scheme = color_scheme.name();
        match self {
            Self::Cartoon => {
                format!("{{cartoon: {{colorscheme: '{scheme}'}}}}")
            }
            Self::Stick => format!("{{stick: {{colorscheme: '{scheme}'}}}}"),
            Self::Sphere => {
                format!("{{sphere: {{colorscheme: '{scheme}'}}}}")
            }
            Self::Surface => format!(
                "{{surface: {{colorscheme: '{scheme}', opacity: 0.8}}}}"
            ),
        }
    }
}

/// Base coloring applied before the risk overlay.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    /// Rainbow over the chain (default).
    #[default]
    Spectrum,
    /// By secondary structure.
    SecondaryStructure,
    /// By chain.
    Chain,
    /// By residue type.
    ResidueType,
}

impl ColorScheme {
    /// The 3Dmol.js colorscheme name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Spectrum => "spectrum",
            Self::SecondaryStructure => "sstruc",
            Self::Chain => "chain",
            Self::ResidueType => "resn",
        }
    }
}

/// One per-residue directive for the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidueAnnotation {
    /// 1-indexed residue position.
    pub position: u32,
    /// RGB-hex or named color.
    pub color: String,
    /// Optional short text label shown next to the residue.
    pub label: Option<String>,
}

/// Risk-overlay annotations: one colored directive per residue.
///
/// Scores are 0-indexed into the sequence; the renderer wants 1-indexed
/// residue numbers, so position `i` becomes residue `i + 1`. No labels —
/// the coloring itself is the overlay.
#[must_use]
pub fn risk_annotations(scores: &[f64]) -> Vec<ResidueAnnotation> {
    scores
        .iter()
        .enumerate()
        .map(|(i, &score)| ResidueAnnotation {
            position: (i + 1) as u32,
            color: RiskLevel::from_score(score).hex_color().to_owned(),
            label: None,
        })
        .collect()
}

/// Mutation-highlight annotations: red marker plus the mutation name.
#[must_use]
pub fn mutation_annotations(mutations: &[Mutation]) -> Vec<ResidueAnnotation> {
    mutations
        .iter()
        .map(|m| ResidueAnnotation {
            position: m.position,
            color: "red".to_owned(),
            label: Some(m.name.to_owned()),
        })
        .collect()
}

/// A fully-specified viewer page ready for templating.
#[derive(Debug, Clone)]
pub struct ViewerPage {
    /// Opaque structure payload (PDB text) embedded into the page.
    pub pdb_data: String,
    /// Whole-structure style.
    pub style: ViewStyle,
    /// Base coloring scheme.
    pub color_scheme: ColorScheme,
    /// Per-residue overlay directives, applied after the base style.
    pub annotations: Vec<ResidueAnnotation>,
}

impl ViewerPage {
    /// Render the self-contained HTML page.
    ///
    /// All dynamic values are embedded through JSON serialization so
    /// arbitrary payload text cannot break out of the script context.
    #[must_use]
    pub fn render(&self) -> String {
        // serde_json never fails on these types (strings, numbers,
        // options); fall back to empty literals if it ever does. `<` is
        // escaped on top of JSON's own escaping so a payload containing
        // `</script>` cannot close the script element.
        let pdb_json = serde_json::to_string(&self.pdb_data)
            .unwrap_or_else(|_| "\"\"".to_owned())
            .replace('<', "\\u003c");
        let annotations_json = serde_json::to_string(&self.annotations)
            .unwrap_or_else(|_| "[]".to_owned())
            .replace('<', "\\u003c");
        let style_directive = self.style.directive(self.color_scheme);

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>α-Synuclein 3D Viewer</title>
<script src="{MOL_JS_URL}"></script>
<style>
  body {{ margin: 0; background: black; }}
  #viewer {{ height: 600px; width: 100%; position: relative; }}
</style>
</head>
<body>
<div id="viewer"></div>
<script>
let element = document.getElementById('viewer');
let viewer = $3Dmol.createViewer(element, {{ backgroundColor: 'black' }});

let pdbData = {pdb_json};
viewer.addModel(pdbData, "pdb");
viewer.setStyle({{}}, {style_directive});

let annotations = {annotations_json};
annotations.forEach(function(a) {{
    viewer.addStyle({{resi: a.position}},
                    {{sphere: {{color: a.color, radius: a.label ? 2.0 : 0.8}}}});
    if (a.label) {{
        viewer.addLabel(a.label, {{position: {{resi: a.position}},
                                 backgroundColor: a.color,
                                 fontColor: 'white',
                                 fontSize: 12,
                                 borderThickness: 1}});
    }}
}});

viewer.zoomTo();
viewer.spin(true);
viewer.render();
</script>
</body>
</html>
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{
        mutation_annotations, risk_annotations, ColorScheme, ViewStyle,
        ViewerPage,
    };
    use crate::mutations::PARKINSONS_MUTATIONS;

    #[test]
    fn style_directives_name_the_scheme() {
        let d = ViewStyle::Cartoon.directive(ColorScheme::Spectrum);
        assert_eq!(d, "{cartoon: {colorscheme: 'spectrum'}}");
        let d = ViewStyle::Surface.directive(ColorScheme::Chain);
        assert!(d.contains("surface") && d.contains("opacity: 0.8"));
    }

    #[test]
    fn risk_annotations_are_one_indexed() {
        let annotations = risk_annotations(&[10.0, 85.0]);
        assert_eq!(annotations.len(), 2);
        assert_eq!(annotations[0].position, 1);
        assert_eq!(annotations[0].color, "#2b83ba");
        assert_eq!(annotations[1].position, 2);
        assert_eq!(annotations[1].color, "#d7191c");
        assert!(annotations.iter().all(|a| a.label.is_none()));
    }

    #[test]
    fn mutation_annotations_carry_labels() {
        let annotations = mutation_annotations(&PARKINSONS_MUTATIONS);
        let a53t = annotations
            .iter()
            .find(|a| a.label.as_deref() == Some("A53T"))
            .unwrap();
        assert_eq!(a53t.position, 53);
        assert_eq!(a53t.color, "red");
    }

    #[test]
    fn rendered_page_embeds_model_and_annotations() {
        let page = ViewerPage {
            pdb_data: "ATOM      1  N   MET A   1".to_owned(),
            style: ViewStyle::Cartoon,
            color_scheme: ColorScheme::Spectrum,
            annotations: risk_annotations(&[95.0]),
        };
        let html = page.render();
        assert!(html.contains("$3Dmol.createViewer"));
        assert!(html.contains("viewer.addModel(pdbData, \"pdb\")"));
        assert!(html.contains("{cartoon: {colorscheme: 'spectrum'}}"));
        assert!(html.contains("#d7191c"));
        assert!(html.contains("viewer.zoomTo()"));
    }

    #[test]
    fn payload_text_cannot_escape_the_script_context() {
        let page = ViewerPage {
            pdb_data: "</script><script>alert(1)".to_owned(),
            style: ViewStyle::Stick,
            color_scheme: ColorScheme::ResidueType,
            annotations: Vec::new(),
        };
        let html = page.render();
        // JSON string escaping keeps the raw close-tag out of the page
        assert!(!html.contains("</script><script>alert"));
    }
}
